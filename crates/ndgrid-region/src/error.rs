//! Error types for ndgrid-region

use ndgrid_core::Point;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ndgrid_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: {0}")]
    InvalidSeed(Point),

    /// Dimensionality disagreement between views, seed, or shape
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
