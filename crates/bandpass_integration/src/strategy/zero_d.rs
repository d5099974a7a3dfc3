//! 0D strategy: spatially constant parameters.

use super::NodeIntegrator;
use crate::bandpass::Bandpass;
use crate::error::BandpassError;
use crate::parameters::SpectralParameterSet;
use crate::result::ScalingResult;
use bandpass_core::traits::FreqScaling;
use tracing::debug;

/// Integrate the emission law once over the bandpass.
///
/// Returns [`ScalingResult::Scalar`] for single-state inputs and
/// [`ScalingResult::PerState`] when parameters or the law differ between
/// polarisation states.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
/// use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
/// use bandpass_integration::strategy::zero_d;
/// use bandpass_integration::{Bandpass, ScalingResult, SpectralParameter, SpectralParameterSet};
///
/// struct Identity(ParameterSchema);
///
/// impl FreqScaling for Identity {
///     fn schema(&self) -> &ParameterSchema {
///         &self.0
///     }
///
///     fn freq_scaling(
///         &self,
///         freqs: &FrequencyAxis,
///         _state: Stokes,
///         _point: &ParameterPoint<'_>,
///     ) -> Result<Vec<f64>, EmissionError> {
///         Ok(freqs.values().to_vec())
///     }
/// }
///
/// let law = Identity(ParameterSchema::new(vec![ParameterSpec::new("a", ParameterUnit::Dimensionless)]));
/// let freqs = FrequencyAxis::new(vec![10.0, 20.0, 30.0], FrequencyUnit::GHz).unwrap();
/// let bandpass = Bandpass::new(freqs, vec![0.2, 0.6, 0.2]).unwrap();
/// let params = SpectralParameterSet::new()
///     .with("a", SpectralParameter::constant(1.0, ParameterUnit::Dimensionless))
///     .unwrap();
///
/// let result = zero_d::integrate(&bandpass, &law, &params).unwrap();
/// assert!((result.as_scalar().unwrap() - 160.0).abs() < 1e-12);
/// ```
pub fn integrate<L>(
    bandpass: &Bandpass,
    law: &L,
    params: &SpectralParameterSet,
) -> Result<ScalingResult, BandpassError>
where
    L: FreqScaling + ?Sized,
{
    let dim = params.dimensionality();
    if dim != 0 {
        return Err(BandpassError::StrategyMismatch {
            strategy: 0,
            grid: dim,
        });
    }

    let mut nodes = NodeIntegrator::new(bandpass, law, params);
    let integrals = nodes.integrate(&[])?;
    debug!(
        states = nodes.states().len(),
        evaluations = nodes.evaluations(),
        "0D bandpass integration complete"
    );

    Ok(match integrals.as_slice() {
        [single] => ScalingResult::Scalar(*single),
        _ => ScalingResult::PerState(integrals),
    })
}
