//! Sampling capabilities
//!
//! Two layers of capability traits decouple the fill algorithms from any
//! concrete storage:
//!
//! - [`Sample`] is the narrow numeric capability of a single grid element:
//!   it can be read as an integer and rebuilt from one. Any element type
//!   satisfying it is admissible; the algorithms never depend on the
//!   concrete representation.
//! - [`Sampler`] / [`SamplerMut`] are total views over ℤⁿ: every position,
//!   in bounds or not, yields a defined integer value. Concrete
//!   implementations are the extended views in [`crate::grid`].

use crate::point::Point;

/// Numeric capability of a grid element.
///
/// `to_integer` is the integer projection used for comparison;
/// `from_integer` is the assignment path. Narrowing conversions truncate,
/// so callers writing through a narrow element type must keep label values
/// within its range.
pub trait Sample: Copy + PartialEq + std::fmt::Debug {
    /// The element's integer projection.
    fn to_integer(self) -> i64;

    /// Build an element from an integer value (truncating on narrowing).
    fn from_integer(value: i64) -> Self;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_integer(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_integer(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Read-only sampling view, total over all of ℤⁿ.
pub trait Sampler {
    /// Dimensionality of the coordinate space.
    fn num_dims(&self) -> usize;

    /// Integer value at `pos`. Defined for every position, including those
    /// outside any finite backing storage.
    fn sample(&self, pos: &Point) -> i64;
}

/// Read-write sampling view, total over all of ℤⁿ.
pub trait SamplerMut: Sampler {
    /// Write `value` at `pos`. Writes outside the finite backing storage
    /// are accepted and discarded.
    fn set_sample(&mut self, pos: &Point, value: i64);
}
