//! Natural cubic spline interpolation.

use super::{check_strictly_increasing, find_segment, out_of_bounds, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Natural cubic spline through strictly increasing knots.
///
/// Stores the knot values together with the spline's second derivatives,
/// which vanish at both ends. Used for integral curves along a grid axis when
/// a 2D mesh collapses to a line; a straight line is reproduced exactly.
///
/// # Example
///
/// ```
/// use bandpass_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let temps = [15.0_f64, 20.0, 25.0, 30.0];
/// let integrals = [0.8, 1.0, 1.2, 1.4];
///
/// let spline = CubicSplineInterpolator::new(&temps, &integrals).unwrap();
/// assert!((spline.interpolate(22.5).unwrap() - 1.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    knots: Vec<T>,
    values: Vec<T>,
    curvature: Vec<T>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Fit the natural spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - `xs` and `ys` differ in length
    /// * `InterpolationError::InsufficientData` - fewer than 3 knots
    /// * `InterpolationError::NonMonotonicData` - `xs` is not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "{} knots but {} values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 3 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 3,
            });
        }
        check_strictly_increasing(xs)?;

        Ok(Self {
            knots: xs.to_vec(),
            values: ys.to_vec(),
            curvature: natural_second_derivatives(xs, ys),
        })
    }

    /// Knot positions.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.knots
    }

    /// Second derivatives at the knots.
    #[inline]
    pub fn second_derivatives(&self) -> &[T] {
        &self.curvature
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always false for a constructed spline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// With `h = x1 - x0`, `a = (x1 - x) / h`, `b = (x - x0) / h`:
    ///
    /// ```text
    /// y = a*y0 + b*y1 + ((a³ - a)*M0 + (b³ - b)*M1) * h² / 6
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (lo, hi) = self.domain();
        if x < lo || x > hi {
            return Err(out_of_bounds(x, lo, hi));
        }

        let i = find_segment(&self.knots, x);
        let (a, b, c, d) = segment_weights(self.knots[i], self.knots[i + 1], x);
        Ok(a * self.values[i]
            + b * self.values[i + 1]
            + c * self.curvature[i]
            + d * self.curvature[i + 1])
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }
}

/// Second derivatives of the natural cubic spline through `(xs, ys)`.
///
/// Solves the tridiagonal system for the interior second derivatives with
/// the Thomas algorithm; both boundary values are zero. `xs` must be strictly
/// increasing. Fewer than 3 points yields all zeros (the spline is linear).
///
/// # Example
///
/// ```
/// use bandpass_core::math::interpolators::natural_second_derivatives;
///
/// // A straight line has no curvature
/// let m = natural_second_derivatives(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
/// assert!(m.iter().all(|v: &f64| v.abs() < 1e-12));
/// ```
pub fn natural_second_derivatives<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    let n = xs.len();
    let mut m = vec![T::zero(); n];
    if n < 3 {
        return m;
    }

    let two = T::from(2.0).unwrap_or_else(|| T::one() + T::one());
    let six = T::from(6.0).unwrap_or_else(|| two + two + two);

    // Intervals h[i] = x[i+1] - x[i]
    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    // Interior row k couples M[k], M[k+1], M[k+2]:
    // h[k]*M[k] + 2*(h[k]+h[k+1])*M[k+1] + h[k+1]*M[k+2] = 6*(slope[k+1] - slope[k])
    let interior = n - 2;
    let mut c_prime: Vec<T> = Vec::with_capacity(interior);
    let mut d_prime: Vec<T> = Vec::with_capacity(interior);

    for k in 0..interior {
        let diag = two * (h[k] + h[k + 1]);
        let rhs = six * ((ys[k + 2] - ys[k + 1]) / h[k + 1] - (ys[k + 1] - ys[k]) / h[k]);
        if k == 0 {
            c_prime.push(h[k + 1] / diag);
            d_prime.push(rhs / diag);
        } else {
            let denom = diag - h[k] * c_prime[k - 1];
            c_prime.push(h[k + 1] / denom);
            d_prime.push((rhs - h[k] * d_prime[k - 1]) / denom);
        }
    }

    // Back substitution
    m[interior] = d_prime[interior - 1];
    for k in (0..interior - 1).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }

    m
}

/// Weights `(a, b, c, d)` of the second-derivative form of a cubic segment:
/// `s(x) = a*y0 + b*y1 + c*M0 + d*M1`.
#[inline]
pub(crate) fn segment_weights<T: Float>(x0: T, x1: T, x: T) -> (T, T, T, T) {
    let h = x1 - x0;
    let a = (x1 - x) / h;
    let b = (x - x0) / h;
    let sixth = T::one() / T::from(6.0).unwrap_or_else(T::one);
    let h2 = h * h * sixth;
    (a, b, (a * a * a - a) * h2, (b * b * b - b) * h2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knot_requirements() {
        let spline = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(spline.len(), 3);
        assert_eq!(
            CubicSplineInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err(),
            InterpolationError::InsufficientData { got: 2, need: 3 }
        );
        assert_eq!(
            CubicSplineInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 0.0]).unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_natural_boundary_conditions() {
        let interp =
            CubicSplineInterpolator::new(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, 1.0, 0.0])
                .unwrap();
        let m = interp.second_derivatives();
        assert_eq!(m[0], 0.0);
        assert_eq!(m[4], 0.0);
    }

    #[test]
    fn test_three_point_second_derivative() {
        // With M0 = M2 = 0: 2*(h0+h1)*M1 = 6*((y2-y1)/h1 - (y1-y0)/h0)
        let m = natural_second_derivatives(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]);
        assert_relative_eq!(m[1], 6.0 * (3.0 - 1.0) / 4.0);
    }

    #[test]
    fn test_passes_through_knots() {
        let xs = [0.0, 0.5, 1.5, 2.0, 3.5];
        let ys = [1.0, -2.0, 0.5, 4.0, 3.0];
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reproduces_linear_function() {
        let xs: Vec<f64> = (0..8).map(|i| i as f64 * 0.7).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x - 1.0).collect();
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        assert_relative_eq!(interp.interpolate(2.45).unwrap(), 3.0 * 2.45 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_smooth_function_accuracy() {
        let xs: Vec<f64> = (0..=20).map(|i| i as f64 * 0.1).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        // Away from the natural boundaries the error is small
        assert_relative_eq!(interp.interpolate(1.05).unwrap(), 1.05_f64.sin(), epsilon = 1e-4);
    }

    #[test]
    fn test_clamped_evaluation() {
        let interp = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[2.0, 3.0, 5.0]).unwrap();
        assert_relative_eq!(interp.interpolate_clamped(-1.0).unwrap(), 2.0);
        assert_relative_eq!(interp.interpolate_clamped(4.0).unwrap(), 5.0);
    }
}
