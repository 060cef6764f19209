//! Grid - the n-dimensional array container
//!
//! [`Grid`] is the fundamental container: a finite n-dimensional array of
//! [`Sample`] elements, stored row-major with dimension 0 fastest-moving.
//!
//! # Ownership model
//!
//! `Grid` uses `Arc` for efficient cloning (shared ownership). To modify
//! element data, convert to [`GridMut`] via [`Grid::try_into_mut`] or
//! [`Grid::to_mut`], then convert back with `Into<Grid>`. The split
//! enforces exclusive write access at compile time.

mod access;
mod extend;

pub use access::Positions;
pub use extend::{ExtendedGrid, ExtendedGridMut};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::sample::Sample;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct GridData<T> {
    dims: Vec<u64>,
    data: Vec<T>,
}

impl<T: Sample> GridData<T> {
    fn new(dims: &[u64], value: T) -> Result<Self> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(Error::InvalidDimensions(dims.to_vec()));
        }

        let mut len = 1usize;
        for &d in dims {
            len = usize::try_from(d)
                .ok()
                .and_then(|d| len.checked_mul(d))
                .ok_or_else(|| Error::TooLarge(dims.to_vec()))?;
        }

        Ok(GridData {
            dims: dims.to_vec(),
            data: vec![value; len],
        })
    }
}

/// Immutable n-dimensional grid with shared ownership.
///
/// # Examples
///
/// ```
/// use ndgrid_core::{Grid, Point};
///
/// // A 3-dimensional 4x5x6 grid of bytes, zero-initialized
/// let grid: Grid<u8> = Grid::new(&[4, 5, 6]).unwrap();
/// assert_eq!(grid.num_dims(), 3);
/// assert_eq!(grid.len(), 120);
/// assert_eq!(grid.get(&Point::new(vec![1, 2, 3])), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Grid<T> {
    inner: Arc<GridData<T>>,
}

impl<T: Sample> Grid<T> {
    /// Create a grid with the given extents, zero-initialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `dims` is empty or contains
    /// a zero extent, and [`Error::TooLarge`] if the element count
    /// overflows the address space.
    pub fn new(dims: &[u64]) -> Result<Self> {
        Self::filled(dims, T::from_integer(0))
    }

    /// Create a grid with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::new`].
    pub fn filled(dims: &[u64], value: T) -> Result<Self> {
        Ok(Grid {
            inner: Arc::new(GridData::new(dims, value)?),
        })
    }

    /// Extents along each dimension.
    #[inline]
    pub fn dims(&self) -> &[u64] {
        &self.inner.dims
    }

    /// Extent along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= num_dims()`.
    #[inline]
    pub fn dim(&self, d: usize) -> u64 {
        self.inner.dims[d]
    }

    /// Dimensionality of the grid.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.inner.dims.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false: a grid has at least one element by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Raw access to the element data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.inner.data
    }

    /// Number of strong references to this grid's data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a completely independent copy.
    ///
    /// Unlike `clone()`, which shares data via `Arc`, this duplicates the
    /// element storage.
    pub fn deep_clone(&self) -> Self {
        Grid {
            inner: Arc::new(GridData {
                dims: self.inner.dims.clone(),
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the element data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<GridMut<T>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GridMut { inner: data }),
            Err(arc) => Err(Grid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    ///
    /// Always duplicates the element storage.
    pub fn to_mut(&self) -> GridMut<T> {
        GridMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable n-dimensional grid.
///
/// Allows modification of element data. Convert back to an immutable
/// [`Grid`] using `Into<Grid>`.
#[derive(Debug)]
pub struct GridMut<T> {
    inner: GridData<T>,
}

impl<T: Sample> GridMut<T> {
    /// Create a mutable grid with the given extents, zero-initialized.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::new`].
    pub fn new(dims: &[u64]) -> Result<Self> {
        Ok(GridMut {
            inner: GridData::new(dims, T::from_integer(0))?,
        })
    }

    /// Extents along each dimension.
    #[inline]
    pub fn dims(&self) -> &[u64] {
        &self.inner.dims
    }

    /// Extent along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= num_dims()`.
    #[inline]
    pub fn dim(&self, d: usize) -> u64 {
        self.inner.dims[d]
    }

    /// Dimensionality of the grid.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.inner.dims.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false: a grid has at least one element by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Raw access to the element data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.inner.data
    }

    /// Raw mutable access to the element data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.inner.data
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.inner.data.fill(value);
    }

    /// An independent immutable copy of the current contents.
    pub fn snapshot(&self) -> Grid<T> {
        Grid {
            inner: Arc::new(self.inner.clone()),
        }
    }
}

impl<T> From<GridMut<T>> for Grid<T> {
    fn from(grid_mut: GridMut<T>) -> Self {
        Grid {
            inner: Arc::new(grid_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid: Grid<u8> = Grid::new(&[4, 5, 6]).unwrap();
        assert_eq!(grid.dims(), &[4, 5, 6]);
        assert_eq!(grid.num_dims(), 3);
        assert_eq!(grid.len(), 120);
        assert!(!grid.is_empty());
        assert!(grid.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_grid_creation_invalid() {
        assert!(Grid::<u8>::new(&[]).is_err());
        assert!(Grid::<u8>::new(&[3, 0, 3]).is_err());
        assert!(Grid::<u8>::new(&[u64::MAX, u64::MAX]).is_err());
    }

    #[test]
    fn test_grid_filled() {
        let grid = Grid::filled(&[3, 3], 7u32).unwrap();
        assert!(grid.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_cow_try_into_mut() {
        let grid: Grid<u8> = Grid::new(&[2, 2]).unwrap();
        // Unique owner: conversion succeeds without copying
        let grid_mut = grid.try_into_mut().unwrap();
        let grid: Grid<u8> = grid_mut.into();

        // Shared: conversion fails, ownership is returned
        let shared = grid.clone();
        assert_eq!(grid.ref_count(), 2);
        assert!(grid.try_into_mut().is_err());
        drop(shared);
    }

    #[test]
    fn test_to_mut_is_independent() {
        let grid = Grid::filled(&[2, 2], 1u8).unwrap();
        let mut grid_mut = grid.to_mut();
        grid_mut.fill(9);
        assert!(grid.data().iter().all(|&v| v == 1));
        assert!(grid_mut.data().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid_mut: GridMut<u8> = GridMut::new(&[2, 3]).unwrap();
        let before = grid_mut.snapshot();
        grid_mut.fill(5);
        assert!(before.data().iter().all(|&v| v == 0));
        assert!(grid_mut.data().iter().all(|&v| v == 5));
    }
}
