//! Intensity derivatives of radiometric unit conventions.

/// Derivative of specific intensity with respect to a radiometric unit.
///
/// `intensity_derivative(nu)` returns `dI/dX` at frequency `nu` (in hertz),
/// with `I` in W m⁻² Hz⁻¹ sr⁻¹ and `X` the unit's quantity. Integrating two
/// such derivatives against a bandpass gives the coefficient that converts a
/// bandpass-integrated signal from one unit into the other.
///
/// Any `Fn(f64) -> f64` is an intensity derivative.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::IntensityDerivative;
///
/// let jansky_per_sr = |_nu: f64| 1.0e-26;
/// assert_eq!(jansky_per_sr.intensity_derivative(30.0e9), 1.0e-26);
/// ```
pub trait IntensityDerivative {
    /// `dI/dX` at `freq_hz`.
    fn intensity_derivative(&self, freq_hz: f64) -> f64;
}

impl<F: Fn(f64) -> f64> IntensityDerivative for F {
    fn intensity_derivative(&self, freq_hz: f64) -> f64 {
        self(freq_hz)
    }
}
