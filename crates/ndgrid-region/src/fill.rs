//! Flood fill
//!
//! This module provides the generic flood-fill engine and the single-grid
//! operations built on it: region filling, hole filling, and border
//! clearing. The engine is a breadth-first traversal over an n-dimensional
//! coordinate space, driven by two caller-supplied policies: a
//! [`Neighborhood`] stencil (which positions are adjacent) and a
//! connectivity predicate (whether an adjacency may be crossed).

use crate::error::{RegionError, RegionResult};
use crate::shape::Neighborhood;
use ndgrid_core::{Grid, GridMut, Point, Sample, Sampler, SamplerMut};
use std::collections::VecDeque;

/// The samples observed at one position: the source view's value and the
/// target view's value, both through their integer projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePair {
    /// Value read through the source view.
    pub source: i64,
    /// Value read through the target view.
    pub target: i64,
}

/// The canonical connectivity predicate: fill spreads only within one
/// pre-existing source region and only into positions not already marked.
///
/// Accepts the edge iff the neighbor's target value differs from the
/// current target value and the source values agree. Because every
/// traversed position carries the fill label in the target, the first
/// clause rejects re-expansion into filled positions, which is what lets
/// [`flood_fill`] run without an explicit visited set.
pub fn same_region(current: SamplePair, neighbor: SamplePair) -> bool {
    neighbor.target != current.target && current.source == neighbor.source
}

/// Flood fill from a seed through arbitrary views.
///
/// Starting at `seed`, writes `fill_label` into `target` at every position
/// reachable through `shape` adjacencies admitted by `predicate`, breadth
/// first. The predicate sees the sample pair at the current position and
/// at the candidate neighbor; it must be pure and independent of traversal
/// order. Returns the number of positions written (the seed included).
///
/// `source` and `target` may be views of different grids (the source then
/// defines immutable region labels and the target collects the output
/// mask) or of the same underlying data via [`fill_region`].
///
/// The traversal keeps no explicit visited set: a position's target value
/// becomes `fill_label` when it is accepted, and a predicate that rejects
/// neighbors whose target already equals the current target - such as
/// [`same_region`] - thereby guarantees every position is enqueued at most
/// once. A predicate without that guard may evaluate edges repeatedly and
/// forfeits the single-write guarantee.
///
/// # Termination
///
/// The engine performs no bounds checking; the views are total over ℤⁿ.
/// The call returns iff the reachable set is finite, which the caller
/// arranges through the views' extension values - extending both views
/// with `fill_label` makes [`same_region`] reject every out-of-bounds
/// edge. If the predicate admits an infinite connected region, the call
/// diverges.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] before any mutation if
/// `source`, `target`, `seed`, and `shape` disagree on dimensionality.
pub fn flood_fill<S, T, N, F>(
    source: &S,
    target: &mut T,
    seed: &Point,
    fill_label: i64,
    shape: &N,
    predicate: F,
) -> RegionResult<u64>
where
    S: Sampler,
    T: SamplerMut,
    N: Neighborhood,
    F: Fn(SamplePair, SamplePair) -> bool,
{
    let n = target.num_dims();
    for actual in [source.num_dims(), seed.num_dims(), shape.num_dims()] {
        if actual != n {
            return Err(RegionError::DimensionMismatch {
                expected: n,
                actual,
            });
        }
    }

    target.set_sample(seed, fill_label);
    let mut filled = 1u64;

    let mut queue = VecDeque::new();
    queue.push_back(seed.clone());

    while let Some(current) = queue.pop_front() {
        let cur = SamplePair {
            source: source.sample(&current),
            target: target.sample(&current),
        };
        for offset in shape.offsets() {
            let neighbor = current.translated(offset);
            let nbr = SamplePair {
                source: source.sample(&neighbor),
                target: target.sample(&neighbor),
            };
            if predicate(cur, nbr) {
                target.set_sample(&neighbor, fill_label);
                filled += 1;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(filled)
}

/// Fill the connected equal-value region containing `seed`, in place.
///
/// Every position reachable from `seed` through `shape` adjacencies over
/// elements equal to the seed's original value is set to `fill_label`.
/// The fill never escapes the grid's finite bounds. Returns the number of
/// positions written, or 0 (without mutation) when the seed already
/// carries `fill_label`.
///
/// The grid is snapshotted once so the original region labels keep driving
/// connectivity while the fill overwrites them.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `seed` lies outside the grid
/// and [`RegionError::DimensionMismatch`] if dimensionalities disagree.
///
/// # Examples
///
/// ```
/// use ndgrid_core::{GridMut, Point};
/// use ndgrid_region::{fill_region, shape::DiamondShape};
///
/// let mut grid: GridMut<u8> = GridMut::new(&[10, 10]).unwrap();
/// let shape = DiamondShape::new(2, 1);
/// let count = fill_region(&mut grid, &Point::new(vec![5, 5]), 1, &shape).unwrap();
/// assert_eq!(count, 100); // all 100 elements filled
/// ```
pub fn fill_region<T, N>(
    grid: &mut GridMut<T>,
    seed: &Point,
    fill_label: i64,
    shape: &N,
) -> RegionResult<u64>
where
    T: Sample,
    N: Neighborhood,
{
    if seed.num_dims() != grid.num_dims() {
        return Err(RegionError::DimensionMismatch {
            expected: grid.num_dims(),
            actual: seed.num_dims(),
        });
    }
    let Some(old_value) = grid.get(seed) else {
        return Err(RegionError::InvalidSeed(seed.clone()));
    };
    if old_value.to_integer() == fill_label {
        return Ok(0);
    }

    let snapshot = grid.snapshot();
    let source = snapshot.extend_with(T::from_integer(fill_label));
    let mut target = grid.extend_mut_with(T::from_integer(fill_label));
    flood_fill(&source, &mut target, seed, fill_label, shape, same_region)
}

/// Fill background regions not connected to the grid border.
///
/// A hole is a connected region of `background` elements that cannot reach
/// the border of the grid through `shape` adjacencies. Holes are set to
/// `fill`; everything else is copied unchanged.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the shape's
/// dimensionality differs from the grid's.
pub fn fill_holes<T, N>(
    grid: &Grid<T>,
    background: i64,
    fill: i64,
    shape: &N,
) -> RegionResult<Grid<T>>
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

    // Mark background positions reachable from the border, then fill the
    // unmarked rest.
    let mut marker: GridMut<u8> = GridMut::new(grid.dims())?;
    let source = grid.extend_with(T::from_integer(background));
    for pos in border_positions(grid.dims()) {
        if grid.get_unchecked(&pos).to_integer() != background
            || marker.get_unchecked(&pos) == 1
        {
            continue;
        }
        let mut target = marker.extend_mut_with(1);
        flood_fill(&source, &mut target, &pos, 1, shape, same_region)?;
    }

    let mut result = grid.to_mut();
    for pos in grid.positions() {
        if grid.get_unchecked(&pos).to_integer() == background
            && marker.get_unchecked(&pos) == 0
        {
            result.set_unchecked(&pos, T::from_integer(fill));
        }
    }
    Ok(result.into())
}

/// Reset regions touching the grid border to the background value.
///
/// Every connected equal-value region of non-`background` elements that
/// contains a border position is overwritten with `background`.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the shape's
/// dimensionality differs from the grid's.
pub fn clear_border<T, N>(grid: &Grid<T>, background: i64, shape: &N) -> RegionResult<Grid<T>>
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

    let mut result = grid.to_mut();
    for pos in border_positions(grid.dims()) {
        if result.get_unchecked(&pos).to_integer() != background {
            fill_region(&mut result, &pos, background, shape)?;
        }
    }
    Ok(result.into())
}

/// Positions of the index domain with at least one coordinate on a face.
pub(crate) fn border_positions(dims: &[u64]) -> impl Iterator<Item = Point> + '_ {
    ndgrid_core::Positions::new(dims).filter(|pos| {
        pos.coords()
            .iter()
            .zip(dims.iter())
            .any(|(&c, &d)| c == 0 || c as u64 == d - 1)
    })
}
