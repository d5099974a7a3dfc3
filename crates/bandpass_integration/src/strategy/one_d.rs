//! 1D strategy: one spatially varying parameter.
//!
//! The emission law is integrated at every grid sample of the varying
//! parameter, giving one curve of integrals per state. Each pixel's scaling
//! is the linear interpolation of its own parameter value on its state's
//! curve, clamped to the curve ends outside the grid.

use super::{check_dimension, state_map, varying_parameter, NodeIntegrator};
use crate::bandpass::Bandpass;
use crate::error::BandpassError;
use crate::grid::InterpolationGrid;
use crate::parameters::SpectralParameterSet;
use crate::result::ScalingResult;
use bandpass_core::math::interpolators::{Interpolator, LinearInterpolator};
use bandpass_core::traits::FreqScaling;
use tracing::debug;

/// Integrate over a one-axis grid and interpolate per pixel.
///
/// Returns [`ScalingResult::PerPixel`] with one row per state.
pub fn integrate<L>(
    bandpass: &Bandpass,
    law: &L,
    params: &SpectralParameterSet,
    grid: &InterpolationGrid,
) -> Result<ScalingResult, BandpassError>
where
    L: FreqScaling + ?Sized,
{
    check_dimension(1, grid)?;
    let axis = &grid.axes()[0];
    let param = varying_parameter(params, axis)?;
    let name = axis.name();

    let mut nodes = NodeIntegrator::new(bandpass, law, params);
    let states = nodes.states();

    let rows = if axis.is_degenerate() {
        let integrals = nodes.integrate(&[(name, axis.min())])?;
        states
            .iter()
            .zip(integrals)
            .map(|(&state, integral)| -> Result<Vec<f64>, BandpassError> {
                Ok(vec![integral; state_map(param, state, name)?.len()])
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut curves: Vec<Vec<f64>> = (0..states.len())
            .map(|_| Vec::with_capacity(axis.len()))
            .collect();
        for &x in axis.values() {
            let integrals = nodes.integrate(&[(name, x)])?;
            for (curve, integral) in curves.iter_mut().zip(integrals) {
                curve.push(integral);
            }
        }

        states
            .iter()
            .zip(&curves)
            .map(|(&state, curve)| -> Result<Vec<f64>, BandpassError> {
                let interpolator = LinearInterpolator::new(axis.values(), curve)?;
                let row = state_map(param, state, name)?
                    .iter()
                    .map(|&value| interpolator.interpolate_clamped(value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    debug!(
        parameter = name,
        grid_points = axis.len(),
        states = states.len(),
        evaluations = nodes.evaluations(),
        "1D bandpass integration complete"
    );
    Ok(ScalingResult::PerPixel(rows))
}
