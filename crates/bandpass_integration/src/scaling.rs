//! Bandpass scaling entry points.
//!
//! [`get_bandpass_scaling`] is the one-call interface used by sky components:
//! it checks the parameters against the emission law's schema, lays out the
//! interpolation grid, picks the strategy for the grid's dimensionality and
//! runs it. [`BandpassScaler`] does the same with custom grid sizes.

use crate::bandpass::Bandpass;
use crate::config::IntegrationConfig;
use crate::error::BandpassError;
use crate::grid::build_grid_with;
use crate::parameters::SpectralParameterSet;
use crate::result::ScalingResult;
use crate::strategy::BandpassIntegration;
use bandpass_core::traits::FreqScaling;
use tracing::debug;

/// Bandpass-integrated scaling of `law` with the default grid sizes.
///
/// The result shape follows the inputs:
///
/// | Varying parameters | States | Result |
/// |---|---|---|
/// | 0 | 1 | [`ScalingResult::Scalar`] |
/// | 0 | 3 | [`ScalingResult::PerState`] |
/// | 1 or 2 | 1 or 3 | [`ScalingResult::PerPixel`] |
///
/// # Errors
///
/// - Parameters missing from, unknown to, or inconsistent with the law's schema
/// - More than two spatially varying parameters
/// - Any emission-law failure, propagated unchanged
///
/// # Example
///
/// ```
/// use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
/// use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
/// use bandpass_integration::{get_bandpass_scaling, Bandpass, SpectralParameter, SpectralParameterSet};
///
/// /// `(ν / 30 GHz)^beta`
/// struct Synchrotron(ParameterSchema);
///
/// impl FreqScaling for Synchrotron {
///     fn schema(&self) -> &ParameterSchema {
///         &self.0
///     }
///
///     fn freq_scaling(
///         &self,
///         freqs: &FrequencyAxis,
///         _state: Stokes,
///         point: &ParameterPoint<'_>,
///     ) -> Result<Vec<f64>, EmissionError> {
///         let beta = point.require("beta")?;
///         Ok(freqs.values().iter().map(|nu| (nu / 30.0).powf(beta)).collect())
///     }
/// }
///
/// let law = Synchrotron(ParameterSchema::new(vec![ParameterSpec::new(
///     "beta",
///     ParameterUnit::Dimensionless,
/// )]));
/// let freqs = FrequencyAxis::new(vec![28.0, 30.0, 32.0], FrequencyUnit::GHz).unwrap();
/// let bandpass = Bandpass::new(freqs, vec![0.25, 0.5, 0.25]).unwrap().normalized().unwrap();
///
/// let params = SpectralParameterSet::new()
///     .with("beta", SpectralParameter::map(vec![-3.1, -3.0, -2.9, -3.0], ParameterUnit::Dimensionless))
///     .unwrap();
///
/// let result = get_bandpass_scaling(&bandpass, &law, &params).unwrap();
/// assert_eq!(result.npix(), Some(4));
/// ```
pub fn get_bandpass_scaling<L>(
    bandpass: &Bandpass,
    law: &L,
    params: &SpectralParameterSet,
) -> Result<ScalingResult, BandpassError>
where
    L: FreqScaling + ?Sized,
{
    BandpassScaler::default().scaling(bandpass, law, params)
}

/// Bandpass scaling with configurable grid sizes.
///
/// # Example
///
/// ```
/// use bandpass_integration::{BandpassError, BandpassScaler, IntegrationConfig};
///
/// let config = IntegrationConfig::new(200, 30).unwrap();
/// let scaler = BandpassScaler::new(config).unwrap();
/// assert_eq!(scaler.config().one_d_grid_points, 200);
///
/// let too_coarse = IntegrationConfig { one_d_grid_points: 1, two_d_grid_points: 30 };
/// assert!(matches!(
///     BandpassScaler::new(too_coarse),
///     Err(BandpassError::InvalidConfig(_))
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandpassScaler {
    config: IntegrationConfig,
}

impl BandpassScaler {
    /// Create a scaler, validating `config`.
    pub fn new(config: IntegrationConfig) -> Result<Self, BandpassError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Grid sizes in use.
    #[inline]
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Bandpass-integrated scaling of `law` over `bandpass`.
    ///
    /// See [`get_bandpass_scaling`] for the result shapes and errors.
    pub fn scaling<L>(
        &self,
        bandpass: &Bandpass,
        law: &L,
        params: &SpectralParameterSet,
    ) -> Result<ScalingResult, BandpassError>
    where
        L: FreqScaling + ?Sized,
    {
        params.validate_against(law.schema())?;
        let grid = build_grid_with(params, &self.config)?;
        let strategy = BandpassIntegration::for_dimension(grid.dim())?;

        debug!(
            ?strategy,
            parameters = params.len(),
            states = params.states(),
            npix = ?params.npix(),
            channels = bandpass.len(),
            "starting bandpass integration"
        );
        strategy.integrate(bandpass, law, params, &grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::SpectralParameter;
    use bandpass_core::traits::{ParameterPoint, ParameterSchema, ParameterSpec};
    use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
    use std::cell::Cell;

    struct Sum {
        schema: ParameterSchema,
        calls: Cell<usize>,
    }

    impl Sum {
        fn new(names: &[&'static str]) -> Self {
            Self {
                schema: ParameterSchema::new(
                    names
                        .iter()
                        .map(|name| ParameterSpec::new(*name, ParameterUnit::Dimensionless))
                        .collect(),
                ),
                calls: Cell::new(0),
            }
        }
    }

    impl FreqScaling for Sum {
        fn schema(&self) -> &ParameterSchema {
            &self.schema
        }

        fn freq_scaling(
            &self,
            freqs: &FrequencyAxis,
            _state: Stokes,
            point: &ParameterPoint<'_>,
        ) -> Result<Vec<f64>, EmissionError> {
            self.calls.set(self.calls.get() + 1);
            let total: f64 = point.iter().map(|(_, value)| value).sum();
            Ok(vec![total; freqs.len()])
        }
    }

    fn bandpass() -> Bandpass {
        let freqs = FrequencyAxis::new(vec![1.0, 2.0, 3.0], FrequencyUnit::GHz).unwrap();
        Bandpass::new(freqs, vec![1.0, 1.0, 1.0]).unwrap()
    }

    fn map(values: Vec<f64>) -> SpectralParameter {
        SpectralParameter::map(values, ParameterUnit::Dimensionless)
    }

    #[test]
    fn test_three_varying_parameters_rejected_before_evaluation() {
        let law = Sum::new(&["a", "b", "c"]);
        let params = SpectralParameterSet::new()
            .with("a", map(vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap()
            .with("b", map(vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap()
            .with("c", map(vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap();

        assert_eq!(
            get_bandpass_scaling(&bandpass(), &law, &params).unwrap_err(),
            BandpassError::UnsupportedDimensionality { dim: 3, max: 2 }
        );
        assert_eq!(law.calls.get(), 0);
    }

    #[test]
    fn test_schema_checked_before_evaluation() {
        let law = Sum::new(&["a"]);
        let params = SpectralParameterSet::new()
            .with("b", SpectralParameter::constant(1.0, ParameterUnit::Dimensionless))
            .unwrap();

        assert_eq!(
            get_bandpass_scaling(&bandpass(), &law, &params).unwrap_err(),
            BandpassError::MissingParameter("a".to_string())
        );
        assert_eq!(law.calls.get(), 0);
    }

    #[test]
    fn test_strategy_follows_dimensionality() {
        let law = Sum::new(&["a", "b"]);
        let constant = SpectralParameter::constant(1.0, ParameterUnit::Dimensionless);

        let zero = SpectralParameterSet::new()
            .with("a", constant.clone())
            .unwrap()
            .with("b", constant.clone())
            .unwrap();
        // ∫ 2 dν over [1, 3]
        assert_eq!(
            get_bandpass_scaling(&bandpass(), &law, &zero).unwrap(),
            ScalingResult::Scalar(4.0)
        );

        let one = SpectralParameterSet::new()
            .with("a", map(vec![0.0, 1.0, 2.0, 3.0]))
            .unwrap()
            .with("b", constant)
            .unwrap();
        let scaler = BandpassScaler::new(IntegrationConfig::new(4, 4).unwrap()).unwrap();
        let result = scaler.scaling(&bandpass(), &law, &one).unwrap();
        assert_eq!(result, ScalingResult::PerPixel(vec![vec![2.0, 4.0, 6.0, 8.0]]));
    }

    #[test]
    fn test_custom_grid_sizes_drive_evaluation_count() {
        let law = Sum::new(&["a", "b"]);
        let params = SpectralParameterSet::new()
            .with("a", map(vec![0.0, 1.0, 2.0, 3.0]))
            .unwrap()
            .with("b", map(vec![3.0, 2.0, 1.0, 0.0]))
            .unwrap();
        let scaler = BandpassScaler::new(IntegrationConfig::new(10, 12).unwrap()).unwrap();

        scaler.scaling(&bandpass(), &law, &params).unwrap();
        assert_eq!(law.calls.get(), 144);
    }
}
