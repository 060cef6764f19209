//! Connected region labeling
//!
//! Assigns a distinct label to every connected equal-value region of a
//! grid, one flood fill per region.

use crate::error::{RegionError, RegionResult};
use crate::fill::{flood_fill, same_region};
use crate::shape::Neighborhood;
use ndgrid_core::{Grid, GridMut, Sample};

/// Label the connected equal-value regions of `grid`.
///
/// Positions whose integer value equals `background` stay 0; every other
/// position receives the label of its region, with labels assigned
/// 1..=count in scan order of the regions' first positions. Two positions
/// share a label iff they hold equal values and are connected through
/// `shape` adjacencies over equal values. Returns the label grid and the
/// region count.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the shape's
/// dimensionality differs from the grid's.
pub fn label_regions<T, N>(
    grid: &Grid<T>,
    background: i64,
    shape: &N,
) -> RegionResult<(Grid<i64>, u64)>
where
    T: Sample,
    N: Neighborhood,
{
    if shape.num_dims() != grid.num_dims() {
        return Err(RegionError::DimensionMismatch {
            expected: grid.num_dims(),
            actual: shape.num_dims(),
        });
    }

    let mut labels: GridMut<i64> = GridMut::new(grid.dims())?;
    let source = grid.extend_with(T::from_integer(background));
    let mut count = 0u64;

    for pos in grid.positions() {
        if grid.get_unchecked(&pos).to_integer() == background
            || labels.get_unchecked(&pos) != 0
        {
            continue;
        }
        count += 1;
        let label = count as i64;
        // Extending the label view with the fresh label blocks expansion
        // past the grid bounds.
        let mut target = labels.extend_mut_with(label);
        flood_fill(&source, &mut target, &pos, label, shape, same_region)?;
    }

    Ok((labels.into(), count))
}

/// Number of positions carrying each label in a label grid.
///
/// Index 0 counts the background; index `l` counts label `l`.
pub fn region_sizes(labels: &Grid<i64>, count: u64) -> Vec<u64> {
    let mut sizes = vec![0u64; count as usize + 1];
    for &label in labels.data() {
        if label >= 0 && (label as usize) < sizes.len() {
            sizes[label as usize] += 1;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::DiamondShape;
    use ndgrid_core::Point;

    #[test]
    fn test_label_two_regions() {
        let mut grid: GridMut<u8> = GridMut::new(&[6, 3]).unwrap();
        // Two separated bars of 1s
        for y in 0..3 {
            grid.set(&Point::new(vec![0, y]), 1).unwrap();
            grid.set(&Point::new(vec![5, y]), 1).unwrap();
        }
        let grid: Grid<u8> = grid.into();
        let shape = DiamondShape::new(2, 1);
        let (labels, count) = label_regions(&grid, 0, &shape).unwrap();
        assert_eq!(count, 2);
        assert_eq!(labels.get(&Point::new(vec![0, 0])), Some(1));
        assert_eq!(labels.get(&Point::new(vec![0, 2])), Some(1));
        assert_eq!(labels.get(&Point::new(vec![5, 1])), Some(2));
        assert_eq!(labels.get(&Point::new(vec![2, 1])), Some(0));
    }

    #[test]
    fn test_label_splits_on_value_change() {
        // Adjacent but different values form distinct regions.
        let mut grid: GridMut<u8> = GridMut::new(&[4, 1]).unwrap();
        grid.set(&Point::new(vec![0, 0]), 1).unwrap();
        grid.set(&Point::new(vec![1, 0]), 1).unwrap();
        grid.set(&Point::new(vec![2, 0]), 2).unwrap();
        grid.set(&Point::new(vec![3, 0]), 2).unwrap();
        let grid: Grid<u8> = grid.into();
        let shape = DiamondShape::new(2, 1);
        let (labels, count) = label_regions(&grid, 0, &shape).unwrap();
        assert_eq!(count, 2);
        assert_ne!(
            labels.get(&Point::new(vec![1, 0])),
            labels.get(&Point::new(vec![2, 0]))
        );
    }

    #[test]
    fn test_region_sizes() {
        let mut grid: GridMut<u8> = GridMut::new(&[5, 1]).unwrap();
        grid.set(&Point::new(vec![0, 0]), 1).unwrap();
        grid.set(&Point::new(vec![1, 0]), 1).unwrap();
        grid.set(&Point::new(vec![4, 0]), 3).unwrap();
        let grid: Grid<u8> = grid.into();
        let shape = DiamondShape::new(2, 1);
        let (labels, count) = label_regions(&grid, 0, &shape).unwrap();
        let sizes = region_sizes(&labels, count);
        assert_eq!(sizes, vec![2, 2, 1]);
    }
}
