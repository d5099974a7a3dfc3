//! Interpolation methods for numerical computation.
//!
//! This module provides the interpolation algorithms used to turn a coarse
//! table of bandpass integrals into per-pixel scaling factors, generic over
//! `T: num_traits::Float`.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`BicubicSplineInterpolator`]: Tensor-product natural bicubic spline on a
//!   rectangular grid
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//! - `interpolate_clamped(x: T)`: Evaluate with `x` clamped into the domain
//!
//! ## Example
//!
//! ```
//! use bandpass_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//!
//! // Outside the domain the edge value is returned
//! assert_eq!(interp.interpolate_clamped(7.0).unwrap(), 9.0);
//! ```

mod bicubic;
mod cubic_spline;
mod linear;
mod traits;

// Re-export public types at module level
pub use bicubic::BicubicSplineInterpolator;
pub use cubic_spline::{natural_second_derivatives, CubicSplineInterpolator};
pub use linear::LinearInterpolator;
pub use traits::Interpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// Validate that knots are strictly increasing and return the first offending index.
pub(crate) fn check_strictly_increasing<T: Float>(xs: &[T]) -> Result<(), InterpolationError> {
    match xs.windows(2).position(|w| !(w[1] > w[0])) {
        Some(index) => Err(InterpolationError::NonMonotonicData { index: index + 1 }),
        None => Ok(()),
    }
}

/// Find the segment index `i` such that `xs[i] <= x < xs[i+1]`,
/// clamped to the valid segment range [0, n-2].
#[inline]
pub(crate) fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    let pos = xs.partition_point(|&xi| xi <= x);
    if pos == 0 {
        0
    } else if pos >= xs.len() {
        xs.len() - 2
    } else {
        pos - 1
    }
}

/// Build an out-of-bounds error for `x` against `[min, max]`.
pub(crate) fn out_of_bounds<T: Float>(x: T, min: T, max: T) -> InterpolationError {
    InterpolationError::OutOfBounds {
        x: x.to_f64().unwrap_or(f64::NAN),
        min: min.to_f64().unwrap_or(f64::NAN),
        max: max.to_f64().unwrap_or(f64::NAN),
    }
}
