//! Bicubic spline interpolation on rectangular grids.

use super::cubic_spline::{natural_second_derivatives, segment_weights};
use super::{check_strictly_increasing, find_segment, out_of_bounds};
use crate::types::InterpolationError;
use num_traits::Float;

/// Tensor-product natural bicubic spline over a rectangular grid.
///
/// Interpolates the grid values exactly, is C² along both axes and
/// reproduces any function of the form `a + b*x + c*y + d*x*y` exactly.
/// Construction precomputes the second derivatives along x, along y and the
/// mixed fourth derivative at every node, so each evaluation is a binary
/// search per axis followed by a 16-term sum.
///
/// Row `i` of the mesh holds the values along `ys` at `xs[i]`, so
/// `zs[i][j] = z(xs[i], ys[j])`.
///
/// # Example
///
/// ```
/// use bandpass_core::math::interpolators::BicubicSplineInterpolator;
///
/// // z = 1 + 2 * beta + 0.1 * t
/// let betas = [1.0_f64, 1.5, 2.0];
/// let temps = [10.0, 20.0];
/// let mesh = [&[4.0, 5.0][..], &[5.0, 6.0][..], &[6.0, 7.0][..]];
///
/// let spline = BicubicSplineInterpolator::new(&betas, &temps, &mesh).unwrap();
/// let z = spline.interpolate(1.25, 15.0).unwrap();
/// assert!((z - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BicubicSplineInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    zs: Vec<Vec<T>>,
    /// ∂²z/∂x² at the nodes
    zxx: Vec<Vec<T>>,
    /// ∂²z/∂y² at the nodes
    zyy: Vec<Vec<T>>,
    /// ∂⁴z/∂x²∂y² at the nodes
    zxxyy: Vec<Vec<T>>,
}

impl<T: Float> BicubicSplineInterpolator<T> {
    /// Fit the spline to a mesh with one row of `zs` per entry of `xs`.
    ///
    /// Both axes need at least 2 strictly increasing knots; with exactly 2
    /// the surface is bilinear along that axis.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InsufficientData` - an axis has fewer than 2 knots
    /// * `InterpolationError::NonMonotonicData` - an axis is not strictly increasing
    /// * `InterpolationError::InvalidInput` - the mesh shape differs from the axes
    pub fn new(xs: &[T], ys: &[T], zs: &[&[T]]) -> Result<Self, InterpolationError> {
        for axis in [xs, ys] {
            if axis.len() < 2 {
                return Err(InterpolationError::InsufficientData {
                    got: axis.len(),
                    need: 2,
                });
            }
            check_strictly_increasing(axis)?;
        }

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "mesh has {} rows for {} x knots",
                zs.len(),
                xs.len()
            )));
        }

        for (i, row) in zs.iter().enumerate() {
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "mesh row {} has {} values for {} y knots",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
        }

        let mesh: Vec<Vec<T>> = zs.iter().map(|row| row.to_vec()).collect();
        let zyy: Vec<Vec<T>> = mesh
            .iter()
            .map(|row| natural_second_derivatives(ys, row))
            .collect();
        let zxx = second_derivatives_along_x(xs, &mesh);
        let zxxyy = second_derivatives_along_x(xs, &zyy);

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: mesh,
            zxx,
            zyy,
            zxxyy,
        })
    }

    /// Evaluate the surface at `(x, y)`.
    ///
    /// Returns `InterpolationError::OutOfBounds` outside the mesh rectangle.
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        if x < x_min || x > x_max {
            return Err(out_of_bounds(x, x_min, x_max));
        }

        let (y_min, y_max) = self.domain_y();
        if y < y_min || y > y_max {
            return Err(out_of_bounds(y, y_min, y_max));
        }

        let i = find_segment(&self.xs, x);
        let j = find_segment(&self.ys, y);

        let (ax, bx, cx, dx) = segment_weights(self.xs[i], self.xs[i + 1], x);
        let wy = segment_weights(self.ys[j], self.ys[j + 1], y);

        let along_y = |grid: &[Vec<T>], d2: &[Vec<T>], row: usize| -> T {
            let (ay, by, cy, dy) = wy;
            ay * grid[row][j] + by * grid[row][j + 1] + cy * d2[row][j] + dy * d2[row][j + 1]
        };

        let z = ax * along_y(&self.zs, &self.zyy, i)
            + bx * along_y(&self.zs, &self.zyy, i + 1)
            + cx * along_y(&self.zxx, &self.zxxyy, i)
            + dx * along_y(&self.zxx, &self.zxxyy, i + 1);

        Ok(z)
    }

    /// Interpolate with (x, y) clamped onto the grid rectangle.
    ///
    /// NaN in either coordinate yields NaN.
    pub fn interpolate_clamped(&self, x: T, y: T) -> Result<T, InterpolationError> {
        if x.is_nan() || y.is_nan() {
            return Ok(T::nan());
        }
        let (x_min, x_max) = self.domain_x();
        let (y_min, y_max) = self.domain_y();
        self.interpolate(x.max(x_min).min(x_max), y.max(y_min).min(y_max))
    }

    /// `(min, max)` of the x knots.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// `(min, max)` of the y knots.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Knots along x.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Knots along y.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Mesh values, `zs[i][j] = z(xs[i], ys[j])`.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }
}

/// Natural-spline second derivatives along x for every column of `grid`.
fn second_derivatives_along_x<T: Float>(xs: &[T], grid: &[Vec<T>]) -> Vec<Vec<T>> {
    let ny = grid.first().map_or(0, Vec::len);
    let mut out = vec![vec![T::zero(); ny]; grid.len()];
    let mut column = Vec::with_capacity(grid.len());
    for j in 0..ny {
        column.clear();
        column.extend(grid.iter().map(|row| row[j]));
        for (i, m) in natural_second_derivatives(xs, &column).into_iter().enumerate() {
            out[i][j] = m;
        }
    }
    out
}
