//! 2D strategy: two spatially varying parameters.
//!
//! The emission law is integrated at every node of the rectangular mesh
//! spanned by the two grid axes. Each state's mesh of integrals is fitted
//! with a natural bicubic spline, evaluated at each pixel's own parameter
//! pair and clamped to the mesh edge outside it.
//!
//! When one varying parameter spans a range too narrow to sample, the mesh
//! collapses to a line along the other axis and a natural cubic spline is
//! used instead; when both do, every pixel receives the single node integral.

use super::{check_dimension, state_map, varying_parameter, NodeIntegrator};
use crate::bandpass::Bandpass;
use crate::error::BandpassError;
use crate::grid::{GridAxis, InterpolationGrid};
use crate::parameters::{SpectralParameter, SpectralParameterSet};
use crate::result::ScalingResult;
use bandpass_core::math::interpolators::{
    BicubicSplineInterpolator, CubicSplineInterpolator, Interpolator,
};
use bandpass_core::traits::FreqScaling;
use bandpass_core::types::Stokes;
use tracing::debug;

/// Integrate over a two-axis mesh and interpolate per pixel.
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
    check_dimension(2, grid)?;
    let (x_axis, y_axis) = (&grid.axes()[0], &grid.axes()[1]);
    let x_param = varying_parameter(params, x_axis)?;
    let y_param = varying_parameter(params, y_axis)?;

    let mut nodes = NodeIntegrator::new(bandpass, law, params);
    let states = nodes.states();
    let x = Varying::new(x_axis, x_param);
    let y = Varying::new(y_axis, y_param);

    let rows = match (x_axis.is_degenerate(), y_axis.is_degenerate()) {
        (true, true) => {
            let integrals =
                nodes.integrate(&[(x_axis.name(), x_axis.min()), (y_axis.name(), y_axis.min())])?;
            states
                .iter()
                .zip(integrals)
                .map(|(&state, integral)| -> Result<Vec<f64>, BandpassError> {
                    Ok(vec![integral; x.map(state)?.len()])
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        (false, true) => along_line(&mut nodes, &x, (y_axis.name(), y_axis.min()))?,
        (true, false) => along_line(&mut nodes, &y, (x_axis.name(), x_axis.min()))?,
        (false, false) => over_mesh(&mut nodes, &x, &y)?,
    };

    debug!(
        parameters = ?(x_axis.name(), y_axis.name()),
        grid_points = x_axis.len(),
        states = states.len(),
        evaluations = nodes.evaluations(),
        "2D bandpass integration complete"
    );
    Ok(ScalingResult::PerPixel(rows))
}

/// A grid axis paired with the parameter it samples.
struct Varying<'g> {
    axis: &'g GridAxis,
    param: &'g SpectralParameter,
}

impl<'g> Varying<'g> {
    fn new(axis: &'g GridAxis, param: &'g SpectralParameter) -> Self {
        Self { axis, param }
    }

    fn name(&self) -> &'g str {
        self.axis.name()
    }

    fn map(&self, state: Stokes) -> Result<&'g [f64], BandpassError> {
        state_map(self.param, state, self.axis.name())
    }
}

fn over_mesh<L: FreqScaling + ?Sized>(
    nodes: &mut NodeIntegrator<'_, L>,
    x: &Varying<'_>,
    y: &Varying<'_>,
) -> Result<Vec<Vec<f64>>, BandpassError> {
    let states = nodes.states();
    let (xs, ys) = (x.axis.values(), y.axis.values());

    // meshes[state][i][j] = integral at (xs[i], ys[j])
    let mut meshes: Vec<Vec<Vec<f64>>> = (0..states.len())
        .map(|_| Vec::with_capacity(xs.len()))
        .collect();
    for &xi in xs {
        let mut mesh_rows: Vec<Vec<f64>> = (0..states.len())
            .map(|_| Vec::with_capacity(ys.len()))
            .collect();
        for &yj in ys {
            let integrals = nodes.integrate(&[(x.name(), xi), (y.name(), yj)])?;
            for (row, integral) in mesh_rows.iter_mut().zip(integrals) {
                row.push(integral);
            }
        }
        for (mesh, row) in meshes.iter_mut().zip(mesh_rows) {
            mesh.push(row);
        }
    }

    states
        .iter()
        .zip(&meshes)
        .map(|(&state, mesh)| -> Result<Vec<f64>, BandpassError> {
            let zs: Vec<&[f64]> = mesh.iter().map(Vec::as_slice).collect();
            let spline = BicubicSplineInterpolator::new(xs, ys, &zs)?;
            let row = x
                .map(state)?
                .iter()
                .zip(y.map(state)?)
                .map(|(&px, &py)| spline.interpolate_clamped(px, py))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(row)
        })
        .collect()
}

fn along_line<L: FreqScaling + ?Sized>(
    nodes: &mut NodeIntegrator<'_, L>,
    moving: &Varying<'_>,
    fixed: (&str, f64),
) -> Result<Vec<Vec<f64>>, BandpassError> {
    let states = nodes.states();
    let knots = moving.axis.values();

    let mut curves: Vec<Vec<f64>> = (0..states.len())
        .map(|_| Vec::with_capacity(knots.len()))
        .collect();
    for &knot in knots {
        let integrals = nodes.integrate(&[(moving.name(), knot), fixed])?;
        for (curve, integral) in curves.iter_mut().zip(integrals) {
            curve.push(integral);
        }
    }

    states
        .iter()
        .zip(&curves)
        .map(|(&state, curve)| -> Result<Vec<f64>, BandpassError> {
            let spline = CubicSplineInterpolator::new(knots, curve)?;
            let row = moving
                .map(state)?
                .iter()
                .map(|&value| spline.interpolate_clamped(value))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(row)
        })
        .collect()
}
