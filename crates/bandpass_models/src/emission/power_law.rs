//! Power-law emission (synchrotron-like components).

use super::ReferenceFrequency;
use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
use bandpass_core::types::{EmissionError, FrequencyAxis, ParameterUnit, Stokes};

/// Power law `(ν / ν_ref)^β` with spectral index `beta`.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::{FreqScaling, ParameterPoint};
/// use bandpass_core::types::{FrequencyAxis, FrequencyUnit, Stokes};
/// use bandpass_models::emission::{PowerLaw, ReferenceFrequency};
///
/// let law = PowerLaw::new(ReferenceFrequency::new(30.0, FrequencyUnit::GHz).unwrap());
/// let freqs = FrequencyAxis::new(vec![30.0, 60.0], FrequencyUnit::GHz).unwrap();
/// let curve = law
///     .freq_scaling(&freqs, Stokes::I, &ParameterPoint::new().with("beta", -3.0))
///     .unwrap();
/// assert!((curve[0] - 1.0).abs() < 1e-12);
/// assert!((curve[1] - 0.125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PowerLaw {
    nu_ref: ReferenceFrequency,
    schema: ParameterSchema,
}

impl PowerLaw {
    /// Name of the spectral index parameter.
    pub const BETA: &'static str = "beta";

    /// Create a power law anchored at `nu_ref`.
    pub fn new(nu_ref: ReferenceFrequency) -> Self {
        Self {
            nu_ref,
            schema: ParameterSchema::new(vec![ParameterSpec::new(
                Self::BETA,
                ParameterUnit::Dimensionless,
            )]),
        }
    }

    /// Reference frequency.
    pub fn reference(&self) -> ReferenceFrequency {
        self.nu_ref
    }
}

impl FreqScaling for PowerLaw {
    fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    fn reference_states(&self) -> usize {
        self.nu_ref.states()
    }

    fn freq_scaling(
        &self,
        freqs: &FrequencyAxis,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError> {
        let beta = point.require(Self::BETA)?;
        let nu_ref = self.nu_ref.hz(state);
        Ok(freqs.hz().map(|nu| (nu / nu_ref).powf(beta)).collect())
    }
}
