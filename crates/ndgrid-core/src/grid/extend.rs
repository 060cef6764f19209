//! Extended sampling views
//!
//! An extended view pairs a finite grid with a constant extension value,
//! making every position in ℤⁿ sampleable: in-bounds reads come from the
//! grid, out-of-bounds reads return the extension value. The mutable view
//! writes through to the grid in bounds and discards writes outside it
//! (the extension value is constant).
//!
//! The extension value is the caller's termination lever for the fill
//! algorithms: choosing it so the connectivity predicate rejects every
//! out-of-bounds edge keeps the reachable set finite.

use super::{Grid, GridMut};
use crate::point::Point;
use crate::sample::{Sample, Sampler, SamplerMut};

/// Read-only view of a [`Grid`] extended to all of ℤⁿ.
#[derive(Debug, Clone)]
pub struct ExtendedGrid<'a, T> {
    grid: &'a Grid<T>,
    extension: T,
}

impl<T: Sample> Grid<T> {
    /// View this grid as total over ℤⁿ, returning `extension` outside the
    /// finite bounds.
    pub fn extend_with(&self, extension: T) -> ExtendedGrid<'_, T> {
        ExtendedGrid {
            grid: self,
            extension,
        }
    }
}

impl<T: Sample> Sampler for ExtendedGrid<'_, T> {
    #[inline]
    fn num_dims(&self) -> usize {
        self.grid.num_dims()
    }

    #[inline]
    fn sample(&self, pos: &Point) -> i64 {
        self.grid.get(pos).unwrap_or(self.extension).to_integer()
    }
}

/// Read-write view of a [`GridMut`] extended to all of ℤⁿ.
#[derive(Debug)]
pub struct ExtendedGridMut<'a, T> {
    grid: &'a mut GridMut<T>,
    extension: T,
}

impl<T: Sample> GridMut<T> {
    /// View this grid as total over ℤⁿ, returning `extension` outside the
    /// finite bounds. Out-of-bounds writes are discarded.
    pub fn extend_mut_with(&mut self, extension: T) -> ExtendedGridMut<'_, T> {
        ExtendedGridMut {
            grid: self,
            extension,
        }
    }
}

impl<T: Sample> Sampler for ExtendedGridMut<'_, T> {
    #[inline]
    fn num_dims(&self) -> usize {
        self.grid.num_dims()
    }

    #[inline]
    fn sample(&self, pos: &Point) -> i64 {
        self.grid.get(pos).unwrap_or(self.extension).to_integer()
    }
}

impl<T: Sample> SamplerMut for ExtendedGridMut<'_, T> {
    #[inline]
    fn set_sample(&mut self, pos: &Point, value: i64) {
        if self.grid.contains(pos) {
            self.grid.set_unchecked(pos, T::from_integer(value));
        }
    }
}
