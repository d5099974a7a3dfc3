//! CMB anisotropies in brightness-temperature units.

use super::{planck_derivative_factor, ReferenceFrequency};
use crate::constants::{H, K_B, T_CMB};
use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema};
use bandpass_core::types::{EmissionError, FrequencyAxis, Stokes};

/// Thermal CMB: constant in K_CMB, hence `g(ν) / g(ν_ref)` in K_RJ.
///
/// Has no spectral parameters, so it always integrates through the 0D path.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalCmb {
    nu_ref: ReferenceFrequency,
    schema: ParameterSchema,
}

impl ThermalCmb {
    /// Create the CMB law anchored at `nu_ref`.
    pub fn new(nu_ref: ReferenceFrequency) -> Self {
        Self {
            nu_ref,
            schema: ParameterSchema::empty(),
        }
    }
}

impl FreqScaling for ThermalCmb {
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
        _point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError> {
        let x_per_hz = H / (K_B * T_CMB);
        let reference = planck_derivative_factor(x_per_hz * self.nu_ref.hz(state));
        Ok(freqs
            .hz()
            .map(|nu| planck_derivative_factor(x_per_hz * nu) / reference)
            .collect())
    }
}
