//! Common interface for 1D interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a fixed set of knots.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
pub trait Interpolator<T: Float> {
    /// Interpolate at `x`.
    ///
    /// Returns `InterpolationError::OutOfBounds` when `x` lies outside
    /// [`domain`](Interpolator::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the valid interpolation range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Interpolate with `x` clamped into the domain.
    ///
    /// Points below the domain take the first knot's value and points above
    /// take the last knot's value; no extrapolation is performed. NaN input
    /// yields NaN.
    fn interpolate_clamped(&self, x: T) -> Result<T, InterpolationError> {
        if x.is_nan() {
            return Ok(T::nan());
        }
        let (x_min, x_max) = self.domain();
        self.interpolate(x.max(x_min).min(x_max))
    }
}
