//! ndgrid-core - n-dimensional grid container and sampling views
//!
//! This crate provides the data model shared by the ndgrid workspace:
//!
//! - **Positions** - integer coordinates of arbitrary dimensionality
//!   ([`Point`])
//! - **Grids** - finite n-dimensional arrays with copy-on-write ownership
//!   ([`Grid`] / [`GridMut`])
//! - **Sampling capabilities** - the numeric element capability
//!   ([`Sample`]) and total views over ℤⁿ ([`Sampler`] / [`SamplerMut`])
//! - **Extended views** - out-of-bounds extension by a constant value
//!   ([`ExtendedGrid`] / [`ExtendedGridMut`])
//!
//! # Example
//!
//! ```
//! use ndgrid_core::{GridMut, Point, Sampler};
//!
//! let mut grid: GridMut<u8> = GridMut::new(&[8, 8]).unwrap();
//! grid.set(&Point::new(vec![3, 4]), 1).unwrap();
//!
//! // Extended views never go out of bounds
//! let view = grid.extend_mut_with(0);
//! assert_eq!(view.sample(&Point::new(vec![3, 4])), 1);
//! assert_eq!(view.sample(&Point::new(vec![-100, 200])), 0);
//! ```

pub mod error;
pub mod grid;
pub mod point;
pub mod sample;

pub use error::{Error, Result};
pub use grid::{ExtendedGrid, ExtendedGridMut, Grid, GridMut, Positions};
pub use point::Point;
pub use sample::{Sample, Sampler, SamplerMut};
