//! Error types for ndgrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::point::Point;
use thiserror::Error;

/// ndgrid-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions (empty list or an extent of zero)
    #[error("invalid grid dimensions: {0:?}")]
    InvalidDimensions(Vec<u64>),

    /// Total element count overflows the address space
    #[error("grid too large: {0:?}")]
    TooLarge(Vec<u64>),

    /// Position outside the grid's finite bounds
    #[error("position {pos} out of bounds for dimensions {dims:?}")]
    OutOfBounds { pos: Point, dims: Vec<u64> },

    /// Position dimensionality differs from the grid's
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for ndgrid-core operations
pub type Result<T> = std::result::Result<T, Error>;
