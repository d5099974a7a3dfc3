//! Instrument bandpass profiles.

use crate::error::BandpassError;
use bandpass_core::math::integration::{trapz, trapz_product};
use bandpass_core::traits::IntensityDerivative;
use bandpass_core::types::{EmissionError, FrequencyAxis};

/// Frequency response of a detector: non-negative weights over a frequency
/// axis.
///
/// Integrals are taken over the axis values in the axis unit. The profile is
/// never normalised implicitly; see [`normalized`](Bandpass::normalized).
///
/// # Example
///
/// ```
/// use bandpass_core::types::{FrequencyAxis, FrequencyUnit};
/// use bandpass_integration::Bandpass;
///
/// let freqs = FrequencyAxis::new(vec![10.0, 20.0, 30.0], FrequencyUnit::GHz).unwrap();
/// let bandpass = Bandpass::new(freqs, vec![0.2, 0.6, 0.2]).unwrap();
/// assert!((bandpass.integral().unwrap() - 8.0).abs() < 1e-12);
///
/// let normalized = bandpass.normalized().unwrap();
/// assert!((normalized.integral().unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bandpass {
    freqs: FrequencyAxis,
    weights: Vec<f64>,
}

impl Bandpass {
    /// Pair a frequency axis with its weights.
    ///
    /// # Returns
    ///
    /// * `Err(BandpassError::LengthMismatch)` - Weights and axis differ in length
    /// * `Err(BandpassError::InvalidWeight)` - A weight is negative or not finite
    pub fn new(freqs: FrequencyAxis, weights: Vec<f64>) -> Result<Self, BandpassError> {
        if freqs.len() != weights.len() {
            return Err(BandpassError::LengthMismatch {
                freqs: freqs.len(),
                weights: weights.len(),
            });
        }

        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(BandpassError::InvalidWeight { index, value });
        }

        Ok(Self { freqs, weights })
    }

    /// Frequency axis.
    #[inline]
    pub fn freqs(&self) -> &FrequencyAxis {
        &self.freqs
    }

    /// Weights, one per frequency sample.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a constructed bandpass.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Trapezoid integral of the weights over the axis.
    pub fn integral(&self) -> Result<f64, BandpassError> {
        Ok(trapz(&self.weights, self.freqs.values())?)
    }

    /// Rescale the weights to unit integral.
    ///
    /// Fails with `BandpassError::DegenerateBandpass` when the integral is
    /// zero.
    pub fn normalized(&self) -> Result<Self, BandpassError> {
        let integral = self.integral()?;
        if !(integral.is_finite() && integral > 0.0) {
            return Err(BandpassError::DegenerateBandpass { integral });
        }
        Ok(Self {
            freqs: self.freqs.clone(),
            weights: self.weights.iter().map(|w| w / integral).collect(),
        })
    }

    /// Integrate `curve * weights` over the axis.
    ///
    /// `curve` must hold one value per frequency sample; a curve of any other
    /// length is reported as `EmissionError::CurveLength`.
    pub fn integrate(&self, curve: &[f64]) -> Result<f64, BandpassError> {
        if curve.len() != self.len() {
            return Err(EmissionError::CurveLength {
                got: curve.len(),
                expected: self.len(),
            }
            .into());
        }
        Ok(trapz_product(curve, &self.weights, self.freqs.values())?)
    }

    /// Unit-conversion coefficient between two radiometric conventions.
    ///
    /// Ratio of the bandpass-integrated intensity derivatives,
    /// `∫ w dI/dX_in dν / ∫ w dI/dX_out dν`. Multiplying a map in the input
    /// unit by this coefficient expresses it in the output unit as seen
    /// through this bandpass.
    ///
    /// # Example
    ///
    /// ```
    /// use bandpass_core::types::{FrequencyAxis, FrequencyUnit};
    /// use bandpass_integration::Bandpass;
    ///
    /// let freqs = FrequencyAxis::new(vec![90.0, 100.0, 110.0], FrequencyUnit::GHz).unwrap();
    /// let bandpass = Bandpass::new(freqs, vec![1.0, 1.0, 1.0]).unwrap();
    ///
    /// let kelvin = |nu: f64| 2.0 * nu * nu;
    /// let millikelvin = |nu: f64| 2.0e-3 * nu * nu;
    /// let coefficient = bandpass.coefficient(&kelvin, &millikelvin).unwrap();
    /// assert!((coefficient - 1000.0).abs() < 1e-9);
    /// ```
    pub fn coefficient<I, O>(&self, input: &I, output: &O) -> Result<f64, BandpassError>
    where
        I: IntensityDerivative + ?Sized,
        O: IntensityDerivative + ?Sized,
    {
        let weighted = |unit: &dyn Fn(f64) -> f64| -> Result<f64, BandpassError> {
            let derivative: Vec<f64> = self.freqs.hz().map(unit).collect();
            self.integrate(&derivative)
        };

        let numerator = weighted(&|nu| input.intensity_derivative(nu))?;
        let denominator = weighted(&|nu| output.intensity_derivative(nu))?;
        if !(denominator.is_finite() && denominator != 0.0) {
            return Err(BandpassError::DegenerateBandpass {
                integral: denominator,
            });
        }
        Ok(numerator / denominator)
    }
}
