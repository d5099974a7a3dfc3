//! Trapezoid-rule integration and uniform sampling.
//!
//! All functions are generic over `T: Float` and never mutate their inputs.

use crate::types::IntegrationError;
use num_traits::Float;

/// Integrate sampled values `ys` over abscissae `xs` with the trapezoid rule.
///
/// # Formula
///
/// ```text
/// I = Σ (x[i+1] - x[i]) * (y[i] + y[i+1]) / 2
/// ```
///
/// # Returns
///
/// * `Err(IntegrationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(IntegrationError::InsufficientData)` - Fewer than 2 samples
///
/// # Example
///
/// ```
/// use bandpass_core::math::integration::trapz;
///
/// let xs = [10.0_f64, 20.0, 30.0];
/// let ys = [2.0, 12.0, 6.0];
/// assert_eq!(trapz(&ys, &xs).unwrap(), 160.0);
/// ```
pub fn trapz<T: Float>(ys: &[T], xs: &[T]) -> Result<T, IntegrationError> {
    check_lengths(xs.len(), ys.len())?;

    let two = T::one() + T::one();
    let sum = xs
        .windows(2)
        .zip(ys.windows(2))
        .fold(T::zero(), |acc, (x, y)| acc + (x[1] - x[0]) * (y[0] + y[1]) / two);

    Ok(sum)
}

/// Integrate the product `f * w` over `xs` without materialising the product.
///
/// Equivalent to `trapz(&f.iter().zip(w).map(|(a, b)| a * b).collect(), xs)`.
///
/// # Example
///
/// ```
/// use bandpass_core::math::integration::trapz_product;
///
/// let xs = [10.0_f64, 20.0, 30.0];
/// let f = [10.0, 20.0, 30.0];
/// let w = [0.2, 0.6, 0.2];
/// let direct = 10.0 * (2.0 + 12.0) / 2.0 + 10.0 * (12.0 + 6.0) / 2.0;
/// assert!((trapz_product(&f, &w, &xs).unwrap() - direct).abs() < 1e-12);
/// ```
pub fn trapz_product<T: Float>(f: &[T], w: &[T], xs: &[T]) -> Result<T, IntegrationError> {
    if f.len() != w.len() {
        return Err(IntegrationError::LengthMismatch {
            xs: w.len(),
            ys: f.len(),
        });
    }
    check_lengths(xs.len(), f.len())?;

    let two = T::one() + T::one();
    let mut sum = T::zero();
    for i in 0..xs.len() - 1 {
        let left = f[i] * w[i];
        let right = f[i + 1] * w[i + 1];
        sum = sum + (xs[i + 1] - xs[i]) * (left + right) / two;
    }

    Ok(sum)
}

/// Return `n` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The final sample is exactly `stop`. `n == 1` yields `[start]` and
/// `n == 0` an empty vector.
///
/// # Example
///
/// ```
/// use bandpass_core::math::integration::linspace;
///
/// let xs: Vec<f64> = linspace(-3.0, -2.0, 5);
/// assert_eq!(xs, vec![-3.0, -2.75, -2.5, -2.25, -2.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let denom = T::from(n - 1).unwrap_or_else(T::one);
            let step = (stop - start) / denom;
            let mut points: Vec<T> = (0..n)
                .map(|i| start + T::from(i).unwrap_or_else(T::zero) * step)
                .collect();
            points[n - 1] = stop;
            points
        }
    }
}

fn check_lengths(xs: usize, ys: usize) -> Result<(), IntegrationError> {
    if xs != ys {
        return Err(IntegrationError::LengthMismatch { xs, ys });
    }
    if xs < 2 {
        return Err(IntegrationError::InsufficientData { got: xs, need: 2 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_trapz_constant() {
        let xs = [0.0, 0.5, 2.0];
        let ys = [3.0, 3.0, 3.0];
        assert_relative_eq!(trapz(&ys, &xs).unwrap(), 6.0);
    }

    #[test]
    fn test_trapz_exact_for_linear() {
        let xs: Vec<f64> = linspace(1.0, 4.0, 7);
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        // ∫ (2x + 1) dx over [1, 4] = [x² + x] = 20 - 2 = 18
        assert_relative_eq!(trapz(&ys, &xs).unwrap(), 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapz_length_mismatch() {
        let err = trapz(&[1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, IntegrationError::LengthMismatch { xs: 3, ys: 2 });
    }

    #[test]
    fn test_trapz_single_point() {
        let err = trapz(&[1.0], &[0.0]).unwrap_err();
        assert_eq!(err, IntegrationError::InsufficientData { got: 1, need: 2 });
    }

    #[test]
    fn test_trapz_product_weight_mismatch() {
        let err = trapz_product(&[1.0, 2.0], &[1.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, IntegrationError::LengthMismatch { .. }));
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0_f64, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0_f64, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(4.0_f64, 4.0, 3), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_linspace_endpoint_is_exact() {
        let xs: Vec<f64> = linspace(0.1, 0.7, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[999], 0.7);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_trapz_product_matches_trapz(
            w in proptest::collection::vec(0.0f64..10.0, 2..40)
        ) {
            let n = w.len();
            let xs: Vec<f64> = linspace(1.0, 2.0, n);
            let f: Vec<f64> = xs.iter().map(|x| x * x).collect();
            let product: Vec<f64> = f.iter().zip(&w).map(|(a, b)| a * b).collect();

            let direct = trapz(&product, &xs).unwrap();
            let fused = trapz_product(&f, &w, &xs).unwrap();
            prop_assert!((direct - fused).abs() <= 1e-12 * direct.abs().max(1.0));
        }

        #[test]
        fn test_linspace_is_non_decreasing(
            start in -100.0f64..100.0,
            width in 0.0f64..50.0,
            n in 2usize..200
        ) {
            let xs: Vec<f64> = linspace(start, start + width, n);
            prop_assert_eq!(xs.len(), n);
            prop_assert!(xs.windows(2).all(|w| w[1] >= w[0]));
        }
    }
}
