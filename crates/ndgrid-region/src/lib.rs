//! ndgrid-region - Region processing over n-dimensional grids
//!
//! This crate provides connectivity-based region operations:
//!
//! - **Flood fill** - generic breadth-first label propagation with
//!   pluggable neighborhood shapes and connectivity predicates
//! - **Region filling** - in-place filling of connected equal-value
//!   regions, hole filling, border clearing
//! - **Region labeling** - assigning distinct labels to connected regions
//!
//! # Examples
//!
//! ## Filling a region in place
//!
//! ```
//! use ndgrid_core::{GridMut, Point};
//! use ndgrid_region::{fill_region, shape::DiamondShape};
//!
//! let mut grid: GridMut<u8> = GridMut::new(&[20, 20, 20]).unwrap();
//! let shape = DiamondShape::new(3, 1);
//!
//! // The whole grid is one zero-valued region
//! let count = fill_region(&mut grid, &Point::new(vec![10, 10, 10]), 7, &shape).unwrap();
//! assert_eq!(count, 8000);
//! ```
//!
//! ## Generic flood fill through separate views
//!
//! ```
//! use ndgrid_core::{Grid, GridMut, Point};
//! use ndgrid_region::{flood_fill, same_region, shape::DiamondShape};
//!
//! let source = Grid::filled(&[8, 8], 1u8).unwrap();
//! let mut mask: GridMut<u8> = GridMut::new(&[8, 8]).unwrap();
//! let shape = DiamondShape::new(2, 1);
//!
//! let count = flood_fill(
//!     &source.extend_with(2),
//!     &mut mask.extend_mut_with(2),
//!     &Point::new(vec![4, 4]),
//!     2,
//!     &shape,
//!     same_region,
//! )
//! .unwrap();
//! assert_eq!(count, 64);
//! ```

pub mod error;
pub mod fill;
pub mod label;
pub mod shape;

// Re-export core types
pub use ndgrid_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export fill types and functions
pub use fill::{SamplePair, clear_border, fill_holes, fill_region, flood_fill, same_region};

// Re-export label functions
pub use label::{label_regions, region_sizes};

// Re-export shape types
pub use shape::{BoxShape, DiamondShape, Neighborhood};
