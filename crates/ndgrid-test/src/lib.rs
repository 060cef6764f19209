//! ndgrid-test - Shared test fixtures for the ndgrid workspace
//!
//! Grid builders used by the integration tests. The central fixture is a
//! labeled hyperball split by an axis-aligned dividing plane, constructed
//! identically for any dimensionality so the same assertion can run over
//! 1-D through 4-D grids.

use ndgrid_core::{Grid, GridMut, Point, Sample};

/// Label written into the ball before filling.
pub const START_LABEL: i64 = 1;

/// Label propagated by the fill under test.
pub const FILL_LABEL: i64 = 2;

/// Build a grid by evaluating `f` at every position.
pub fn grid_from_fn<T, F>(dims: &[u64], mut f: F) -> Grid<T>
where
    T: Sample,
    F: FnMut(&Point) -> i64,
{
    let mut grid: GridMut<T> = GridMut::new(dims).expect("valid fixture dimensions");
    for pos in grid.positions() {
        grid.set_unchecked(&pos, T::from_integer(f(&pos)));
    }
    grid.into()
}

/// A hyperball of `START_LABEL` split in two by a background hyperplane,
/// together with the reference picture of filling the seed side.
pub struct SplitBall {
    /// Input grid: the ball labeled `START_LABEL`, except for the
    /// dividing hyperplane, which stays background (0) along with
    /// everything outside the ball.
    pub input: Grid<u8>,
    /// Expected result of filling from `seed` with `FILL_LABEL`: the seed
    /// side of the ball carries `FILL_LABEL`, the far side keeps
    /// `START_LABEL`.
    pub reference: Grid<u8>,
    /// Ball center; lies on the seed side of the dividing plane.
    pub seed: Point,
}

/// Construct the split-ball fixture over an `num_dims`-dimensional grid of
/// extent `side` per dimension.
///
/// The ball has radius `side / 4` and is centered at `side / 3` along
/// every axis. The dividing hyperplane is orthogonal to dimension 0 at
/// signed offset `radius / 3` from the center: ball positions strictly
/// below the plane (the seed side) and strictly above it are labeled
/// `START_LABEL`; positions exactly on the plane stay background, cutting
/// the ball into two disconnected regions under orthogonal connectivity.
pub fn split_ball(num_dims: usize, side: u64) -> SplitBall {
    let dims = vec![side; num_dims];
    let radius = (side / 4) as i64;
    let center = (side / 3) as i64;
    let division = radius / 3;

    let in_ball = move |pos: &Point| -> bool {
        let mut diff_sum = 0i64;
        for d in 0..pos.num_dims() {
            let diff = pos.coord(d) - center;
            diff_sum += diff * diff;
        }
        diff_sum < radius * radius
    };

    let input = grid_from_fn(&dims, |pos| {
        if in_ball(pos) && pos.coord(0) - center != division {
            START_LABEL
        } else {
            0
        }
    });
    let reference = grid_from_fn(&dims, |pos| {
        if !in_ball(pos) {
            0
        } else if pos.coord(0) - center < division {
            FILL_LABEL
        } else if pos.coord(0) - center > division {
            START_LABEL
        } else {
            0
        }
    });

    SplitBall {
        input,
        reference,
        seed: Point::splat(num_dims, center),
    }
}
