//! Integration results.

use bandpass_core::types::Stokes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bandpass-integrated scaling factors.
///
/// Single-state quantities broadcast across all states, and constants
/// broadcast across all pixels, so [`value`](ScalingResult::value) answers
/// for any `(state, pixel)` pair the result covers.
///
/// # Example
///
/// ```
/// use bandpass_core::types::Stokes;
/// use bandpass_integration::ScalingResult;
///
/// let polarised = ScalingResult::PerState(vec![1.0, 0.9, 0.9]);
/// assert_eq!(polarised.value(Stokes::Q, 12_345), Some(0.9));
///
/// let maps = ScalingResult::PerPixel(vec![vec![1.0, 1.1, 1.2]]);
/// assert_eq!(maps.value(Stokes::U, 2), Some(1.2));
/// assert_eq!(maps.value(Stokes::I, 3), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalingResult {
    /// One value for every pixel and state
    Scalar(f64),
    /// One value per state (I, Q, U), the same for every pixel
    PerState(Vec<f64>),
    /// One row per state, one value per pixel
    PerPixel(Vec<Vec<f64>>),
}

impl ScalingResult {
    /// Number of states carried (1 or 3).
    pub fn states(&self) -> usize {
        match self {
            ScalingResult::Scalar(_) => 1,
            ScalingResult::PerState(values) => values.len(),
            ScalingResult::PerPixel(rows) => rows.len(),
        }
    }

    /// Pixels per state, `None` when the result is spatially constant.
    pub fn npix(&self) -> Option<usize> {
        match self {
            ScalingResult::PerPixel(rows) => rows.first().map(Vec::len),
            ScalingResult::Scalar(_) | ScalingResult::PerState(_) => None,
        }
    }

    /// The scalar, if the result is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ScalingResult::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Per-pixel row for `state`, broadcasting single-state results.
    pub fn row(&self, state: Stokes) -> Option<&[f64]> {
        match self {
            ScalingResult::PerPixel(rows) => rows
                .get(row_index(rows.len(), state))
                .map(Vec::as_slice),
            ScalingResult::Scalar(_) | ScalingResult::PerState(_) => None,
        }
    }

    /// Scaling seen by `pixel` in `state`.
    ///
    /// `None` only when `pixel` lies beyond a per-pixel result.
    pub fn value(&self, state: Stokes, pixel: usize) -> Option<f64> {
        match self {
            ScalingResult::Scalar(value) => Some(*value),
            ScalingResult::PerState(values) => values.get(row_index(values.len(), state)).copied(),
            ScalingResult::PerPixel(_) => self.row(state)?.get(pixel).copied(),
        }
    }
}

#[inline]
fn row_index(rows: usize, state: Stokes) -> usize {
    if rows == 1 {
        0
    } else {
        state.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_broadcasts_everywhere() {
        let result = ScalingResult::Scalar(2.5);
        assert_eq!(result.states(), 1);
        assert_eq!(result.npix(), None);
        assert_eq!(result.as_scalar(), Some(2.5));
        assert_eq!(result.value(Stokes::U, 1_000_000), Some(2.5));
        assert_eq!(result.row(Stokes::I), None);
    }

    #[test]
    fn test_per_pixel_rows() {
        let result = ScalingResult::PerPixel(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(result.states(), 3);
        assert_eq!(result.npix(), Some(2));
        assert_eq!(result.row(Stokes::Q), Some(&[3.0, 4.0][..]));
        assert_eq!(result.value(Stokes::U, 0), Some(5.0));
        assert_eq!(result.as_scalar(), None);
    }
}
