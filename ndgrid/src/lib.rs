//! ndgrid - n-dimensional grid processing for Rust
//!
//! Connectivity-based region operations over grids of arbitrary
//! dimensionality: flood fill with pluggable neighborhood shapes and
//! connectivity predicates, region labeling, hole filling, and the grid
//! container and extended sampling views they operate on.
//!
//! # Example
//!
//! ```
//! use ndgrid::{GridMut, Point};
//! use ndgrid::region::{fill_region, shape::DiamondShape};
//!
//! // A 3-dimensional grid, one connected zero-valued region
//! let mut grid: GridMut<u8> = GridMut::new(&[16, 16, 16]).unwrap();
//! let shape = DiamondShape::new(3, 1);
//! let count = fill_region(&mut grid, &Point::new(vec![8, 8, 8]), 1, &shape).unwrap();
//! assert_eq!(count, 4096);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ndgrid_core::*;

// Re-export the region crate as a module to avoid name conflicts
pub use ndgrid_region as region;
