//! Piecewise linear interpolation.

use super::{check_strictly_increasing, find_segment, out_of_bounds, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear curve through strictly increasing knots.
///
/// Used to read per-pixel values off a curve of bandpass integrals sampled
/// on a uniform parameter grid. Between knots the value is the straight line
/// joining the neighbours; [`interpolate_clamped`](Interpolator::interpolate_clamped)
/// holds the end values outside the knot range.
///
/// # Example
///
/// ```
/// use bandpass_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let betas = [-3.2_f64, -3.0, -2.8];
/// let integrals = [0.90, 1.00, 1.12];
///
/// let curve = LinearInterpolator::new(&betas, &integrals).unwrap();
/// assert!((curve.interpolate(-2.9).unwrap() - 1.06).abs() < 1e-12);
/// assert_eq!(curve.interpolate_clamped(-4.0).unwrap(), 0.90);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    knots: Vec<T>,
    values: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Build the curve through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - `xs` and `ys` differ in length
    /// * `InterpolationError::InsufficientData` - fewer than 2 knots
    /// * `InterpolationError::NonMonotonicData` - `xs` is not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "{} knots but {} values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        check_strictly_increasing(xs)?;

        Ok(Self {
            knots: xs.to_vec(),
            values: ys.to_vec(),
        })
    }

    /// Knot positions.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.knots
    }

    /// Values at the knots.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.values
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always false for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (lo, hi) = self.domain();
        if x < lo || x > hi {
            return Err(out_of_bounds(x, lo, hi));
        }

        let i = find_segment(&self.knots, x);
        let (x0, x1) = (self.knots[i], self.knots[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        Ok(y0 + (y1 - y0) * ((x - x0) / (x1 - x0)))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_two_knots_suffice() {
        let curve = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(curve.len(), 2);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_rejects_bad_knots() {
        assert!(matches!(
            LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(InterpolationError::InvalidInput(_))
        ));
        assert_eq!(
            LinearInterpolator::new(&[0.0], &[0.0]).unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        );
        assert_eq!(
            LinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
        assert_eq!(
            LinearInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 2.0]).unwrap_err(),
            InterpolationError::NonMonotonicData { index: 1 }
        );
    }

    #[test]
    fn test_exact_at_knots() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [5.0, -1.0, 7.0];
        let curve = LinearInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(curve.interpolate(*x).unwrap(), *y);
        }
    }

    #[test]
    fn test_outside_domain() {
        let curve = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 40.0]).unwrap();
        assert!(matches!(
            curve.interpolate(0.9),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert_eq!(curve.interpolate_clamped(-5.0).unwrap(), 10.0);
        assert_eq!(curve.interpolate_clamped(99.0).unwrap(), 40.0);
        assert_relative_eq!(curve.interpolate_clamped(2.5).unwrap(), 30.0);
        assert!(curve.interpolate_clamped(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_single_precision() {
        let curve = LinearInterpolator::new(&[0.0f32, 2.0], &[1.0f32, 5.0]).unwrap();
        assert_relative_eq!(curve.interpolate(0.5f32).unwrap(), 2.0f32);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_reproduces_straight_lines(slope in -5.0f64..5.0, offset in -5.0f64..5.0, x in 0.0f64..3.0) {
            let xs = [0.0, 0.5, 2.0, 3.0];
            let ys: Vec<f64> = xs.iter().map(|x| offset + slope * x).collect();
            let curve = LinearInterpolator::new(&xs, &ys).unwrap();

            let y = curve.interpolate(x).unwrap();
            prop_assert!((y - (offset + slope * x)).abs() < 1e-10);
        }
    }
}
