//! Integer positions in n-dimensional coordinate space
//!
//! A [`Point`] is an ordered tuple of `i64` coordinates whose length is the
//! dimensionality of the space it lives in. Points carry no identity beyond
//! their coordinate values and compare by value equality. The same type is
//! used for absolute positions and for relative offsets.

use std::fmt;
use std::ops::Index;

/// An n-dimensional integer position or offset.
///
/// # Examples
///
/// ```
/// use ndgrid_core::Point;
///
/// let p = Point::new(vec![3, 4]);
/// let step = Point::new(vec![0, 1]);
/// assert_eq!(p.translated(&step), Point::new(vec![3, 5]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    coords: Vec<i64>,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: Vec<i64>) -> Self {
        Self { coords }
    }

    /// Create the origin of an `num_dims`-dimensional space.
    pub fn zeros(num_dims: usize) -> Self {
        Self {
            coords: vec![0; num_dims],
        }
    }

    /// Create a point with every coordinate set to `value`.
    pub fn splat(num_dims: usize, value: i64) -> Self {
        Self {
            coords: vec![value; num_dims],
        }
    }

    /// Number of coordinates.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= num_dims()`.
    #[inline]
    pub fn coord(&self, d: usize) -> i64 {
        self.coords[d]
    }

    /// Set the coordinate along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= num_dims()`.
    #[inline]
    pub fn set_coord(&mut self, d: usize, value: i64) {
        self.coords[d] = value;
    }

    /// All coordinates as a slice.
    #[inline]
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// The point obtained by adding `offset` coordinate-wise.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the dimensionalities differ.
    pub fn translated(&self, offset: &Point) -> Point {
        debug_assert_eq!(self.num_dims(), offset.num_dims());
        Point {
            coords: self
                .coords
                .iter()
                .zip(offset.coords.iter())
                .map(|(c, o)| c + o)
                .collect(),
        }
    }

    /// Sum of absolute coordinate values (Manhattan norm).
    pub fn manhattan_norm(&self) -> i64 {
        self.coords.iter().map(|c| c.abs()).sum()
    }

    /// Maximum absolute coordinate value (Chebyshev norm).
    pub fn chebyshev_norm(&self) -> i64 {
        self.coords.iter().map(|c| c.abs()).max().unwrap_or(0)
    }
}

impl From<Vec<i64>> for Point {
    fn from(coords: Vec<i64>) -> Self {
        Point::new(coords)
    }
}

impl From<&[i64]> for Point {
    fn from(coords: &[i64]) -> Self {
        Point::new(coords.to_vec())
    }
}

impl Index<usize> for Point {
    type Output = i64;

    fn index(&self, d: usize) -> &i64 {
        &self.coords[d]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (d, c) in self.coords.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
