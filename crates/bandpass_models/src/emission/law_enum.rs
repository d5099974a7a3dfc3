//! Static dispatch over the built-in emission laws.

use super::{ModifiedBlackbody, PowerLaw, ThermalCmb};
use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema};
use bandpass_core::types::{EmissionError, FrequencyAxis, Stokes};

/// Built-in emission laws behind a single type.
///
/// Lets heterogeneous sky components share one collection without boxing.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::FreqScaling;
/// use bandpass_core::types::FrequencyUnit;
/// use bandpass_models::emission::{EmissionLaw, PowerLaw, ReferenceFrequency, ThermalCmb};
///
/// let nu_ref = ReferenceFrequency::new(30.0, FrequencyUnit::GHz).unwrap();
/// let components = vec![
///     EmissionLaw::from(PowerLaw::new(nu_ref)),
///     EmissionLaw::from(ThermalCmb::new(nu_ref)),
/// ];
/// assert_eq!(components[0].schema().len(), 1);
/// assert!(components[1].schema().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EmissionLaw {
    /// Synchrotron-like power law
    PowerLaw(PowerLaw),
    /// Thermal dust
    ModifiedBlackbody(ModifiedBlackbody),
    /// CMB anisotropies
    ThermalCmb(ThermalCmb),
}

impl EmissionLaw {
    /// Short name of the law.
    pub fn name(&self) -> &'static str {
        match self {
            EmissionLaw::PowerLaw(_) => "power_law",
            EmissionLaw::ModifiedBlackbody(_) => "modified_blackbody",
            EmissionLaw::ThermalCmb(_) => "thermal_cmb",
        }
    }
}

impl FreqScaling for EmissionLaw {
    fn schema(&self) -> &ParameterSchema {
        match self {
            EmissionLaw::PowerLaw(law) => law.schema(),
            EmissionLaw::ModifiedBlackbody(law) => law.schema(),
            EmissionLaw::ThermalCmb(law) => law.schema(),
        }
    }

    fn reference_states(&self) -> usize {
        match self {
            EmissionLaw::PowerLaw(law) => law.reference_states(),
            EmissionLaw::ModifiedBlackbody(law) => law.reference_states(),
            EmissionLaw::ThermalCmb(law) => law.reference_states(),
        }
    }

    fn freq_scaling(
        &self,
        freqs: &FrequencyAxis,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError> {
        match self {
            EmissionLaw::PowerLaw(law) => law.freq_scaling(freqs, state, point),
            EmissionLaw::ModifiedBlackbody(law) => law.freq_scaling(freqs, state, point),
            EmissionLaw::ThermalCmb(law) => law.freq_scaling(freqs, state, point),
        }
    }
}

impl From<PowerLaw> for EmissionLaw {
    fn from(law: PowerLaw) -> Self {
        EmissionLaw::PowerLaw(law)
    }
}

impl From<ModifiedBlackbody> for EmissionLaw {
    fn from(law: ModifiedBlackbody) -> Self {
        EmissionLaw::ModifiedBlackbody(law)
    }
}

impl From<ThermalCmb> for EmissionLaw {
    fn from(law: ThermalCmb) -> Self {
        EmissionLaw::ThermalCmb(law)
    }
}
