//! Neighborhood shapes
//!
//! A neighborhood shape defines which positions count as adjacent to a
//! center: a finite, deterministic, order-stable stencil of offsets that
//! never contains the center itself and never contains duplicates. The
//! stencils here generalize the classic 2-D 4-way and 8-way connectivities
//! to arbitrary dimensionality.

use ndgrid_core::Point;

/// Connectivity stencil over an n-dimensional coordinate space.
pub trait Neighborhood {
    /// Dimensionality of the offsets.
    fn num_dims(&self) -> usize;

    /// The relative offsets of the stencil, in a fixed order. The center
    /// (all-zero offset) is never included.
    fn offsets(&self) -> &[Point];

    /// The neighbors of `center`, in stencil order.
    fn neighbors_of<'a>(&'a self, center: &'a Point) -> impl Iterator<Item = Point> + 'a {
        self.offsets().iter().map(|off| center.translated(off))
    }
}

/// All offsets within Manhattan distance `radius` of the center.
///
/// Radius 1 is orthogonal connectivity: the n-dimensional generalization
/// of 4-way adjacency (2n offsets).
///
/// # Examples
///
/// ```
/// use ndgrid_region::shape::{DiamondShape, Neighborhood};
///
/// let shape = DiamondShape::new(2, 1);
/// assert_eq!(shape.offsets().len(), 4);
/// let shape = DiamondShape::new(3, 1);
/// assert_eq!(shape.offsets().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct DiamondShape {
    num_dims: usize,
    offsets: Vec<Point>,
}

impl DiamondShape {
    /// Create a diamond stencil of the given dimensionality and radius.
    ///
    /// # Panics
    ///
    /// Panics if `num_dims` is 0.
    pub fn new(num_dims: usize, radius: u32) -> Self {
        assert!(num_dims > 0, "shape dimensionality must be positive");
        let mut offsets = Vec::new();
        let mut coords = vec![0i64; num_dims];
        push_diamond(&mut coords, 0, i64::from(radius), &mut offsets);
        DiamondShape { num_dims, offsets }
    }

    /// The stencil radius.
    pub fn radius(&self) -> u32 {
        self.offsets
            .iter()
            .map(|o| o.manhattan_norm())
            .max()
            .unwrap_or(0) as u32
    }
}

impl Neighborhood for DiamondShape {
    fn num_dims(&self) -> usize {
        self.num_dims
    }

    fn offsets(&self) -> &[Point] {
        &self.offsets
    }
}

/// Enumerate offsets with Manhattan norm at most `budget` over dimensions
/// `d..`, lexicographically, skipping the all-zero offset.
fn push_diamond(coords: &mut Vec<i64>, d: usize, budget: i64, out: &mut Vec<Point>) {
    if d == coords.len() {
        if coords.iter().any(|&c| c != 0) {
            out.push(Point::new(coords.clone()));
        }
        return;
    }
    for c in -budget..=budget {
        coords[d] = c;
        push_diamond(coords, d + 1, budget - c.abs(), out);
    }
    coords[d] = 0;
}

/// All offsets within Chebyshev distance `radius` of the center.
///
/// Radius 1 is full connectivity: the n-dimensional generalization of
/// 8-way adjacency (3ⁿ - 1 offsets).
#[derive(Debug, Clone)]
pub struct BoxShape {
    num_dims: usize,
    offsets: Vec<Point>,
}

impl BoxShape {
    /// Create a box stencil of the given dimensionality and radius.
    ///
    /// # Panics
    ///
    /// Panics if `num_dims` is 0.
    pub fn new(num_dims: usize, radius: u32) -> Self {
        assert!(num_dims > 0, "shape dimensionality must be positive");
        let mut offsets = Vec::new();
        let mut coords = vec![0i64; num_dims];
        push_box(&mut coords, 0, i64::from(radius), &mut offsets);
        BoxShape { num_dims, offsets }
    }
}

impl Neighborhood for BoxShape {
    fn num_dims(&self) -> usize {
        self.num_dims
    }

    fn offsets(&self) -> &[Point] {
        &self.offsets
    }
}

fn push_box(coords: &mut Vec<i64>, d: usize, radius: i64, out: &mut Vec<Point>) {
    if d == coords.len() {
        if coords.iter().any(|&c| c != 0) {
            out.push(Point::new(coords.clone()));
        }
        return;
    }
    for c in -radius..=radius {
        coords[d] = c;
        push_box(coords, d + 1, radius, out);
    }
    coords[d] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_diamond_cardinality() {
        // radius 1: 2n orthogonal steps
        assert_eq!(DiamondShape::new(1, 1).offsets().len(), 2);
        assert_eq!(DiamondShape::new(2, 1).offsets().len(), 4);
        assert_eq!(DiamondShape::new(3, 1).offsets().len(), 6);
        assert_eq!(DiamondShape::new(4, 1).offsets().len(), 8);
        // 2-D radius 2: the 13-cell diamond minus the center
        assert_eq!(DiamondShape::new(2, 2).offsets().len(), 12);
    }

    #[test]
    fn test_box_cardinality() {
        assert_eq!(BoxShape::new(2, 1).offsets().len(), 8);
        assert_eq!(BoxShape::new(3, 1).offsets().len(), 26);
        assert_eq!(BoxShape::new(2, 2).offsets().len(), 24);
    }

    #[test]
    fn test_no_center_no_duplicates() {
        for shape in [DiamondShape::new(3, 2), DiamondShape::new(2, 3)] {
            let set: HashSet<&Point> = shape.offsets().iter().collect();
            assert_eq!(set.len(), shape.offsets().len());
            assert!(!set.contains(&Point::zeros(shape.num_dims())));
        }
    }

    #[test]
    fn test_norm_bounds() {
        let shape = DiamondShape::new(3, 2);
        assert!(shape.offsets().iter().all(|o| o.manhattan_norm() <= 2));
        assert_eq!(shape.radius(), 2);

        let shape = BoxShape::new(3, 2);
        assert!(shape.offsets().iter().all(|o| o.chebyshev_norm() <= 2));
    }

    #[test]
    fn test_order_stable() {
        let a = DiamondShape::new(2, 1);
        let b = DiamondShape::new(2, 1);
        assert_eq!(a.offsets(), b.offsets());
        assert_eq!(
            a.offsets(),
            &[
                Point::new(vec![-1, 0]),
                Point::new(vec![0, -1]),
                Point::new(vec![0, 1]),
                Point::new(vec![1, 0]),
            ]
        );
    }

    #[test]
    fn test_neighbors_of_translates() {
        let shape = DiamondShape::new(2, 1);
        let center = Point::new(vec![10, 20]);
        let neighbors: Vec<Point> = shape.neighbors_of(&center).collect();
        assert_eq!(neighbors.len(), 4);
        assert!(neighbors.contains(&Point::new(vec![9, 20])));
        assert!(neighbors.contains(&Point::new(vec![10, 21])));
    }
}
