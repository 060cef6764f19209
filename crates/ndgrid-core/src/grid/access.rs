//! Element access
//!
//! Index arithmetic and per-position get/set operations. Elements are
//! linearized row-major with dimension 0 fastest-moving: for a position
//! `p` in a grid with extents `d`, the linear index is
//! `p[0] + d[0] * (p[1] + d[1] * (p[2] + ...))`.

use super::{Grid, GridData, GridMut};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::sample::Sample;

impl<T> GridData<T> {
    /// Linear index for `pos`, or `None` when out of bounds or of the
    /// wrong dimensionality.
    fn index_of(&self, pos: &Point) -> Option<usize> {
        if pos.num_dims() != self.dims.len() {
            return None;
        }
        let mut index = 0usize;
        for d in (0..self.dims.len()).rev() {
            let c = pos.coord(d);
            if c < 0 || c as u64 >= self.dims[d] {
                return None;
            }
            index = index * self.dims[d] as usize + c as usize;
        }
        Some(index)
    }

    fn contains(&self, pos: &Point) -> bool {
        pos.num_dims() == self.dims.len()
            && pos
                .coords()
                .iter()
                .zip(self.dims.iter())
                .all(|(&c, &d)| c >= 0 && (c as u64) < d)
    }
}

impl<T: Sample> Grid<T> {
    /// Get the element at `pos`.
    ///
    /// Returns `None` if `pos` is out of bounds or has the wrong
    /// dimensionality.
    pub fn get(&self, pos: &Point) -> Option<T> {
        self.inner.index_of(pos).map(|i| self.inner.data[i])
    }

    /// Get the element at `pos` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn get_unchecked(&self, pos: &Point) -> T {
        let i = self
            .inner
            .index_of(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds"));
        self.inner.data[i]
    }

    /// Whether `pos` lies within the grid's finite bounds.
    pub fn contains(&self, pos: &Point) -> bool {
        self.inner.contains(pos)
    }

    /// Iterate over every position of the grid in row-major order, with
    /// dimension 0 fastest-moving.
    pub fn positions(&self) -> Positions {
        Positions::new(self.dims())
    }
}

impl<T: Sample> GridMut<T> {
    /// Get the element at `pos`.
    ///
    /// Returns `None` if `pos` is out of bounds or has the wrong
    /// dimensionality.
    pub fn get(&self, pos: &Point) -> Option<T> {
        self.inner.index_of(pos).map(|i| self.inner.data[i])
    }

    /// Get the element at `pos` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn get_unchecked(&self, pos: &Point) -> T {
        let i = self
            .inner
            .index_of(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds"));
        self.inner.data[i]
    }

    /// Set the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `pos` has the wrong
    /// dimensionality and [`Error::OutOfBounds`] if it lies outside the
    /// grid.
    pub fn set(&mut self, pos: &Point, value: T) -> Result<()> {
        if pos.num_dims() != self.inner.dims.len() {
            return Err(Error::DimensionMismatch {
                expected: self.inner.dims.len(),
                actual: pos.num_dims(),
            });
        }
        match self.inner.index_of(pos) {
            Some(i) => {
                self.inner.data[i] = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                pos: pos.clone(),
                dims: self.inner.dims.clone(),
            }),
        }
    }

    /// Set the element at `pos` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, pos: &Point, value: T) {
        let i = self
            .inner
            .index_of(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds"));
        self.inner.data[i] = value;
    }

    /// Whether `pos` lies within the grid's finite bounds.
    pub fn contains(&self, pos: &Point) -> bool {
        self.inner.contains(pos)
    }

    /// Iterate over every position of the grid in row-major order, with
    /// dimension 0 fastest-moving.
    pub fn positions(&self) -> Positions {
        Positions::new(self.dims())
    }
}

/// Row-major iterator over all positions of a finite index domain.
///
/// Dimension 0 is fastest-moving, matching the element linearization.
#[derive(Debug, Clone)]
pub struct Positions {
    dims: Vec<u64>,
    next: Option<Vec<i64>>,
}

impl Positions {
    /// Iterator over `[0, dims[0]) x ... x [0, dims[n-1])`.
    pub fn new(dims: &[u64]) -> Self {
        let next = if dims.is_empty() || dims.contains(&0) {
            None
        } else {
            Some(vec![0; dims.len()])
        };
        Positions {
            dims: dims.to_vec(),
            next,
        }
    }
}

impl Iterator for Positions {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next.as_ref()?.clone();
        // Odometer increment, dimension 0 first.
        let coords = self.next.as_mut()?;
        let mut done = true;
        for d in 0..coords.len() {
            coords[d] += 1;
            if (coords[d] as u64) < self.dims[d] {
                done = false;
                break;
            }
            coords[d] = 0;
        }
        if done {
            self.next = None;
        }
        Some(Point::new(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid: GridMut<u32> = GridMut::new(&[3, 4]).unwrap();
        let p = Point::new(vec![2, 3]);
        grid.set(&p, 42).unwrap();
        assert_eq!(grid.get(&p), Some(42));
        assert_eq!(grid.get(&Point::new(vec![0, 0])), Some(0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid: Grid<u8> = Grid::new(&[3, 3]).unwrap();
        assert_eq!(grid.get(&Point::new(vec![3, 0])), None);
        assert_eq!(grid.get(&Point::new(vec![-1, 0])), None);
        assert_eq!(grid.get(&Point::new(vec![0, 0, 0])), None);
    }

    #[test]
    fn test_set_errors() {
        let mut grid: GridMut<u8> = GridMut::new(&[3, 3]).unwrap();
        assert!(matches!(
            grid.set(&Point::new(vec![1]), 1),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            grid.set(&Point::new(vec![0, 5]), 1),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_linearization_dim0_fastest() {
        let mut grid: GridMut<u8> = GridMut::new(&[2, 3]).unwrap();
        grid.set(&Point::new(vec![1, 0]), 1).unwrap();
        grid.set(&Point::new(vec![0, 1]), 2).unwrap();
        assert_eq!(grid.data()[1], 1);
        assert_eq!(grid.data()[2], 2);
    }

    #[test]
    fn test_positions_order_and_count() {
        let grid: Grid<u8> = Grid::new(&[2, 2]).unwrap();
        let all: Vec<Point> = grid.positions().collect();
        assert_eq!(
            all,
            vec![
                Point::new(vec![0, 0]),
                Point::new(vec![1, 0]),
                Point::new(vec![0, 1]),
                Point::new(vec![1, 1]),
            ]
        );

        let grid: Grid<u8> = Grid::new(&[3, 4, 5]).unwrap();
        assert_eq!(grid.positions().count(), 60);
    }

    #[test]
    fn test_positions_matches_data_order() {
        let mut grid: GridMut<u16> = GridMut::new(&[4, 3]).unwrap();
        for (i, pos) in grid.positions().enumerate() {
            grid.set(&pos, i as u16).unwrap();
        }
        let expected: Vec<u16> = (0..12).collect();
        assert_eq!(grid.data(), expected.as_slice());
    }
}
