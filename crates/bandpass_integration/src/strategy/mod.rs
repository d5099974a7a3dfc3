//! Dimension-dispatched integration strategies.
//!
//! | Dimensionality | Strategy | Emission-law evaluations |
//! |---|---|---|
//! | 0 | [`zero_d`]: one exact integral | 1 per distinct state |
//! | 1 | [`one_d`]: linear interpolation over a grid of integrals | `n` per distinct state |
//! | 2 | [`two_d`]: bicubic interpolation over a mesh of integrals | `n²` per distinct state |
//!
//! Each strategy is callable on its own; [`BandpassIntegration`] selects one
//! from the grid dimensionality.

pub mod one_d;
pub mod two_d;
pub mod zero_d;

use crate::bandpass::Bandpass;
use crate::error::BandpassError;
use crate::grid::{GridAxis, InterpolationGrid, MAX_DIMENSIONALITY};
use crate::parameters::{SpectralParameter, SpectralParameterSet};
use crate::result::ScalingResult;
use bandpass_core::traits::{FreqScaling, ParameterPoint};
use bandpass_core::types::Stokes;
use tracing::trace;

/// Integration strategy for a given number of spatially varying parameters.
///
/// # Example
///
/// ```
/// use bandpass_integration::{BandpassError, BandpassIntegration};
///
/// assert_eq!(BandpassIntegration::for_dimension(1).unwrap(), BandpassIntegration::OneD);
/// assert_eq!(BandpassIntegration::TwoD.dimension(), 2);
/// assert_eq!(
///     BandpassIntegration::for_dimension(3).unwrap_err(),
///     BandpassError::UnsupportedDimensionality { dim: 3, max: 2 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandpassIntegration {
    /// No varying parameters: exact integral
    ZeroD,
    /// One varying parameter: linear interpolation
    OneD,
    /// Two varying parameters: bicubic interpolation
    TwoD,
}

impl BandpassIntegration {
    /// Strategy for `dim` varying parameters.
    pub fn for_dimension(dim: usize) -> Result<Self, BandpassError> {
        match dim {
            0 => Ok(BandpassIntegration::ZeroD),
            1 => Ok(BandpassIntegration::OneD),
            2 => Ok(BandpassIntegration::TwoD),
            _ => Err(BandpassError::UnsupportedDimensionality {
                dim,
                max: MAX_DIMENSIONALITY,
            }),
        }
    }

    /// Number of varying parameters handled.
    pub fn dimension(&self) -> usize {
        match self {
            BandpassIntegration::ZeroD => 0,
            BandpassIntegration::OneD => 1,
            BandpassIntegration::TwoD => 2,
        }
    }

    /// Run the strategy.
    pub fn integrate<L>(
        &self,
        bandpass: &Bandpass,
        law: &L,
        params: &SpectralParameterSet,
        grid: &InterpolationGrid,
    ) -> Result<ScalingResult, BandpassError>
    where
        L: FreqScaling + ?Sized,
    {
        match self {
            BandpassIntegration::ZeroD => zero_d::integrate(bandpass, law, params),
            BandpassIntegration::OneD => one_d::integrate(bandpass, law, params, grid),
            BandpassIntegration::TwoD => two_d::integrate(bandpass, law, params, grid),
        }
    }
}

/// Evaluates and integrates the emission law at grid nodes.
///
/// At every node each state sees the grid coordinates for the varying
/// parameters and its own constant for every other parameter. States whose
/// parameter values coincide share one evaluation, unless the law carries
/// reference data per state.
pub(crate) struct NodeIntegrator<'a, L: ?Sized> {
    bandpass: &'a Bandpass,
    law: &'a L,
    params: &'a SpectralParameterSet,
    states: &'static [Stokes],
    evaluations: usize,
}

impl<'a, L: FreqScaling + ?Sized> NodeIntegrator<'a, L> {
    pub(crate) fn new(
        bandpass: &'a Bandpass,
        law: &'a L,
        params: &'a SpectralParameterSet,
    ) -> Self {
        let count = if params.states().max(law.reference_states()) > 1 {
            3
        } else {
            1
        };
        Self {
            bandpass,
            law,
            params,
            states: Stokes::for_count(count),
            evaluations: 0,
        }
    }

    /// States every result row is produced for.
    #[inline]
    pub(crate) fn states(&self) -> &'static [Stokes] {
        self.states
    }

    /// Emission-law evaluations performed so far.
    #[inline]
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Bandpass integrals at the node `coords`, one per state.
    pub(crate) fn integrate(&mut self, coords: &[(&str, f64)]) -> Result<Vec<f64>, BandpassError> {
        let shared = self.law.reference_states() == 1;
        let mut points: Vec<ParameterPoint<'a>> = Vec::with_capacity(self.states.len());
        let mut integrals = Vec::with_capacity(self.states.len());

        for &state in self.states {
            let point = self.point(state, coords);
            let reused = if shared {
                points.iter().position(|p| *p == point)
            } else {
                None
            };
            let integral = match reused {
                Some(index) => integrals[index],
                None => self.evaluate(state, &point)?,
            };
            points.push(point);
            integrals.push(integral);
        }

        Ok(integrals)
    }

    fn point(&self, state: Stokes, coords: &[(&str, f64)]) -> ParameterPoint<'a> {
        let mut point = ParameterPoint::with_capacity(self.params.len());
        for (name, param) in self.params.iter() {
            let value = coords
                .iter()
                .find(|(coord, _)| *coord == name)
                .map(|&(_, value)| value)
                .or_else(|| param.scalar(state));
            if let Some(value) = value {
                point.insert(name, value);
            }
        }
        point
    }

    fn evaluate(
        &mut self,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<f64, BandpassError> {
        let curve = self.law.freq_scaling(self.bandpass.freqs(), state, point)?;
        self.evaluations += 1;
        let integral = self.bandpass.integrate(&curve)?;
        trace!(state = %state, ?point, integral, "integrated grid node");
        Ok(integral)
    }
}

/// The parameter behind a grid axis, which must vary spatially.
pub(crate) fn varying_parameter<'p>(
    params: &'p SpectralParameterSet,
    axis: &GridAxis,
) -> Result<&'p SpectralParameter, BandpassError> {
    params
        .get(axis.name())
        .filter(|param| param.is_varying())
        .ok_or_else(|| BandpassError::GridMismatch(axis.name().to_string()))
}

/// The map `param` shows to `state`.
pub(crate) fn state_map<'p>(
    param: &'p SpectralParameter,
    state: Stokes,
    name: &str,
) -> Result<&'p [f64], BandpassError> {
    param
        .state_map(state)
        .ok_or_else(|| BandpassError::GridMismatch(name.to_string()))
}

pub(crate) fn check_dimension(
    strategy: usize,
    grid: &InterpolationGrid,
) -> Result<(), BandpassError> {
    if grid.dim() != strategy {
        return Err(BandpassError::StrategyMismatch {
            strategy,
            grid: grid.dim(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandpass_core::traits::{ParameterSchema, ParameterSpec};
    use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit};
    use std::cell::Cell;

    struct Counting {
        schema: ParameterSchema,
        reference_states: usize,
        calls: Cell<usize>,
    }

    impl FreqScaling for Counting {
        fn schema(&self) -> &ParameterSchema {
            &self.schema
        }

        fn reference_states(&self) -> usize {
            self.reference_states
        }

        fn freq_scaling(
            &self,
            freqs: &FrequencyAxis,
            _state: Stokes,
            point: &ParameterPoint<'_>,
        ) -> Result<Vec<f64>, EmissionError> {
            self.calls.set(self.calls.get() + 1);
            let a = point.require("a")?;
            Ok(vec![a; freqs.len()])
        }
    }

    fn counting(reference_states: usize) -> Counting {
        Counting {
            schema: ParameterSchema::new(vec![ParameterSpec::new(
                "a",
                ParameterUnit::Dimensionless,
            )]),
            reference_states,
            calls: Cell::new(0),
        }
    }

    fn flat_bandpass() -> Bandpass {
        let freqs = FrequencyAxis::new(vec![1.0, 2.0], FrequencyUnit::GHz).unwrap();
        Bandpass::new(freqs, vec![1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_equal_states_share_one_evaluation() {
        let bandpass = flat_bandpass();
        let law = counting(1);
        let params = SpectralParameterSet::new()
            .with(
                "a",
                SpectralParameter::per_state([2.0, 3.0, 3.0], ParameterUnit::Dimensionless),
            )
            .unwrap();

        let mut nodes = NodeIntegrator::new(&bandpass, &law, &params);
        assert_eq!(nodes.states().len(), 3);
        let integrals = nodes.integrate(&[]).unwrap();

        assert_eq!(integrals, vec![2.0, 3.0, 3.0]);
        assert_eq!(nodes.evaluations(), 2);
        assert_eq!(law.calls.get(), 2);
    }

    #[test]
    fn test_per_state_law_is_evaluated_for_every_state() {
        let bandpass = flat_bandpass();
        let law = counting(3);
        let params = SpectralParameterSet::new()
            .with("a", SpectralParameter::constant(2.0, ParameterUnit::Dimensionless))
            .unwrap();

        let mut nodes = NodeIntegrator::new(&bandpass, &law, &params);
        assert_eq!(nodes.integrate(&[]).unwrap(), vec![2.0, 2.0, 2.0]);
        assert_eq!(nodes.evaluations(), 3);
    }

    #[test]
    fn test_coordinates_override_maps() {
        let bandpass = flat_bandpass();
        let law = counting(1);
        let params = SpectralParameterSet::new()
            .with(
                "a",
                SpectralParameter::map(vec![1.0, 2.0, 3.0, 4.0], ParameterUnit::Dimensionless),
            )
            .unwrap();

        let mut nodes = NodeIntegrator::new(&bandpass, &law, &params);
        assert_eq!(nodes.integrate(&[("a", 5.0)]).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_strategy_mismatch() {
        let grid = InterpolationGrid::empty();
        assert_eq!(
            check_dimension(1, &grid).unwrap_err(),
            BandpassError::StrategyMismatch {
                strategy: 1,
                grid: 0
            }
        );
    }
}
