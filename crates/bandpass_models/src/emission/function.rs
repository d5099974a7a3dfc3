//! Closure-backed emission laws.

use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema};
use bandpass_core::types::{EmissionError, FrequencyAxis, Stokes};
use std::fmt;

/// Emission law defined by a closure and an explicit parameter schema.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
/// use bandpass_core::types::{FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
/// use bandpass_models::emission::EmissionFn;
///
/// let schema = ParameterSchema::new(vec![ParameterSpec::new("a", ParameterUnit::Dimensionless)]);
/// let law = EmissionFn::new(schema, |freqs: &FrequencyAxis, _state: Stokes, point: &ParameterPoint<'_>| {
///     let a = point.require("a")?;
///     Ok(freqs.values().iter().map(|nu| a * nu).collect())
/// });
///
/// let freqs = FrequencyAxis::new(vec![1.0, 2.0], FrequencyUnit::GHz).unwrap();
/// let curve = law.freq_scaling(&freqs, Stokes::I, &ParameterPoint::new().with("a", 3.0)).unwrap();
/// assert_eq!(curve, vec![3.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct EmissionFn<F> {
    schema: ParameterSchema,
    reference_states: usize,
    func: F,
}

impl<F> EmissionFn<F>
where
    F: Fn(&FrequencyAxis, Stokes, &ParameterPoint<'_>) -> Result<Vec<f64>, EmissionError>,
{
    /// Wrap `func` with the parameters it consumes.
    pub fn new(schema: ParameterSchema, func: F) -> Self {
        Self {
            schema,
            reference_states: 1,
            func,
        }
    }

    /// Declare that `func` distinguishes polarisation states on its own.
    ///
    /// Any value other than 1 is treated as 3.
    pub fn with_reference_states(mut self, states: usize) -> Self {
        self.reference_states = if states == 1 { 1 } else { 3 };
        self
    }
}

impl<F> fmt::Debug for EmissionFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionFn")
            .field("schema", &self.schema)
            .field("reference_states", &self.reference_states)
            .finish_non_exhaustive()
    }
}

impl<F> FreqScaling for EmissionFn<F>
where
    F: Fn(&FrequencyAxis, Stokes, &ParameterPoint<'_>) -> Result<Vec<f64>, EmissionError>,
{
    fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    fn reference_states(&self) -> usize {
        self.reference_states
    }

    fn freq_scaling(
        &self,
        freqs: &FrequencyAxis,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError> {
        (self.func)(freqs, state, point)
    }
}
