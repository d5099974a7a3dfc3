//! Emission laws.
//!
//! Every law implements [`FreqScaling`](bandpass_core::traits::FreqScaling)
//! and declares its parameters through a
//! [`ParameterSchema`](bandpass_core::traits::ParameterSchema):
//!
//! | Law | Parameters | Scaling |
//! |---|---|---|
//! | [`PowerLaw`] | `beta` | `(ν/ν_ref)^β` |
//! | [`ModifiedBlackbody`] | `beta`, `T` [K] | `(ν/ν_ref)^(β-2) B(ν,T)/B(ν_ref,T)` |
//! | [`ThermalCmb`] | none | `g(ν)/g(ν_ref)`, `g(ν) = x²eˣ/(eˣ-1)²` |
//! | [`EmissionFn`] | user declared | user closure |
//!
//! Scalings are in brightness-temperature (K_RJ) units relative to the
//! reference frequency, which may differ per polarisation state.

mod function;
mod law_enum;
mod modified_blackbody;
mod power_law;
mod reference;
mod thermal_cmb;

pub use function::EmissionFn;
pub use law_enum::EmissionLaw;
pub use modified_blackbody::ModifiedBlackbody;
pub use power_law::PowerLaw;
pub use reference::ReferenceFrequency;
pub use thermal_cmb::ThermalCmb;

/// `x² eˣ / (eˣ - 1)²`, written as `(x/2)² / sinh²(x/2)` to avoid overflow.
#[inline]
pub(crate) fn planck_derivative_factor(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let half = 0.5 * x;
    let ratio = half / half.sinh();
    ratio * ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planck_derivative_factor_matches_direct_form() {
        for x in [1e-3_f64, 0.1, 1.0, 5.0, 20.0] {
            let direct = x * x * x.exp() / x.exp_m1().powi(2);
            assert_relative_eq!(planck_derivative_factor(x), direct, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_planck_derivative_factor_limits() {
        assert_eq!(planck_derivative_factor(0.0), 1.0);
        assert!(planck_derivative_factor(2000.0) >= 0.0);
        assert!(planck_derivative_factor(2000.0).is_finite());
    }
}
