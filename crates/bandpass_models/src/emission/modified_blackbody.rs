//! Modified blackbody emission (thermal dust).

use super::ReferenceFrequency;
use crate::constants::{H, K_B};
use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
use bandpass_core::types::{EmissionError, FrequencyAxis, ParameterUnit, Stokes};

/// Modified blackbody in brightness-temperature units.
///
/// ```text
/// s(ν) = (ν / ν_ref)^(β - 2) · B(ν, T) / B(ν_ref, T)
///      = (ν / ν_ref)^(β + 1) · expm1(hν_ref / kT) / expm1(hν / kT)
/// ```
///
/// # Example
///
/// ```
/// use bandpass_core::traits::{FreqScaling, ParameterPoint};
/// use bandpass_core::types::{FrequencyAxis, FrequencyUnit, Stokes};
/// use bandpass_models::emission::{ModifiedBlackbody, ReferenceFrequency};
///
/// let dust = ModifiedBlackbody::new(ReferenceFrequency::new(545.0, FrequencyUnit::GHz).unwrap());
/// let freqs = FrequencyAxis::new(vec![353.0, 545.0], FrequencyUnit::GHz).unwrap();
/// let point = ParameterPoint::new().with("beta", 1.56).with("T", 19.6);
/// let curve = dust.freq_scaling(&freqs, Stokes::I, &point).unwrap();
/// assert!((curve[1] - 1.0).abs() < 1e-12);
/// assert!(curve[0] < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedBlackbody {
    nu_ref: ReferenceFrequency,
    schema: ParameterSchema,
}

impl ModifiedBlackbody {
    /// Name of the emissivity index parameter.
    pub const BETA: &'static str = "beta";
    /// Name of the dust temperature parameter.
    pub const TEMPERATURE: &'static str = "T";

    /// Create a modified blackbody anchored at `nu_ref`.
    pub fn new(nu_ref: ReferenceFrequency) -> Self {
        Self {
            nu_ref,
            schema: ParameterSchema::new(vec![
                ParameterSpec::new(Self::BETA, ParameterUnit::Dimensionless),
                ParameterSpec::new(Self::TEMPERATURE, ParameterUnit::Kelvin),
            ]),
        }
    }

    /// Reference frequency.
    pub fn reference(&self) -> ReferenceFrequency {
        self.nu_ref
    }
}

impl FreqScaling for ModifiedBlackbody {
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
        let t = point.require(Self::TEMPERATURE)?;
        if !(t.is_finite() && t > 0.0) {
            return Err(EmissionError::InvalidParameter {
                name: Self::TEMPERATURE.to_string(),
                value: t,
                reason: "temperature must be finite and positive".to_string(),
            });
        }

        let nu_ref = self.nu_ref.hz(state);
        let h_over_kt = H / (K_B * t);
        let ref_term = (h_over_kt * nu_ref).exp_m1();

        Ok(freqs
            .hz()
            .map(|nu| (nu / nu_ref).powf(beta + 1.0) * ref_term / (h_over_kt * nu).exp_m1())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::C;
    use approx::assert_relative_eq;
    use bandpass_core::types::FrequencyUnit;

    fn blackbody(nu: f64, t: f64) -> f64 {
        2.0 * H * nu.powi(3) / (C * C) / (H * nu / (K_B * t)).exp_m1()
    }

    #[test]
    fn test_matches_explicit_blackbody_ratio() {
        let dust =
            ModifiedBlackbody::new(ReferenceFrequency::new(545.0, FrequencyUnit::GHz).unwrap());
        let freqs = FrequencyAxis::new(vec![100.0, 217.0, 857.0], FrequencyUnit::GHz).unwrap();
        let (beta, t) = (1.55, 21.0);
        let point = ParameterPoint::new().with("beta", beta).with("T", t);
        let curve = dust.freq_scaling(&freqs, Stokes::I, &point).unwrap();

        let nu_ref = 545.0e9;
        for (nu, value) in freqs.hz().zip(curve) {
            let expected = (nu / nu_ref).powf(beta - 2.0) * blackbody(nu, t) / blackbody(nu_ref, t);
            assert_relative_eq!(value, expected, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_rejects_non_positive_temperature() {
        let dust =
            ModifiedBlackbody::new(ReferenceFrequency::new(545.0, FrequencyUnit::GHz).unwrap());
        let freqs = FrequencyAxis::new(vec![100.0, 200.0], FrequencyUnit::GHz).unwrap();
        let point = ParameterPoint::new().with("beta", 1.5).with("T", 0.0);
        assert!(matches!(
            dust.freq_scaling(&freqs, Stokes::I, &point),
            Err(EmissionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_schema_declares_kelvin() {
        let dust =
            ModifiedBlackbody::new(ReferenceFrequency::new(545.0, FrequencyUnit::GHz).unwrap());
        assert_eq!(
            dust.schema().get("T").map(|spec| spec.unit()),
            Some(ParameterUnit::Kelvin)
        );
    }
}
