//! Reference frequencies.

use crate::error::ModelError;
use bandpass_core::types::{FrequencyUnit, Stokes};

/// Frequency at which an emission law's scaling equals one.
///
/// Stored in hertz. Components fitted separately in intensity and
/// polarisation carry one reference frequency per state.
///
/// # Example
///
/// ```
/// use bandpass_core::types::{FrequencyUnit, Stokes};
/// use bandpass_models::emission::ReferenceFrequency;
///
/// let single = ReferenceFrequency::new(30.0, FrequencyUnit::GHz).unwrap();
/// assert_eq!(single.hz(Stokes::U), 30.0e9);
///
/// let polarised = ReferenceFrequency::per_state([545.0, 353.0, 353.0], FrequencyUnit::GHz).unwrap();
/// assert_eq!(polarised.states(), 3);
/// assert_eq!(polarised.hz(Stokes::I), 545.0e9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceFrequency {
    /// One reference frequency for all states [Hz]
    Single(f64),
    /// One reference frequency per state, ordered I, Q, U [Hz]
    PerState([f64; 3]),
}

impl ReferenceFrequency {
    /// A single reference frequency.
    pub fn new(value: f64, unit: FrequencyUnit) -> Result<Self, ModelError> {
        Ok(Self::Single(validated(value, unit)?))
    }

    /// One reference frequency per polarisation state (I, Q, U).
    pub fn per_state(values: [f64; 3], unit: FrequencyUnit) -> Result<Self, ModelError> {
        let mut hz = [0.0; 3];
        for (slot, value) in hz.iter_mut().zip(values) {
            *slot = validated(value, unit)?;
        }
        Ok(Self::PerState(hz))
    }

    /// Build from a slice of 1 or 3 values.
    pub fn from_slice(values: &[f64], unit: FrequencyUnit) -> Result<Self, ModelError> {
        match *values {
            [value] => Self::new(value, unit),
            [i, q, u] => Self::per_state([i, q, u], unit),
            _ => Err(ModelError::InvalidStateCount(values.len())),
        }
    }

    /// Reference frequency for `state` in hertz.
    #[inline]
    pub fn hz(&self, state: Stokes) -> f64 {
        match self {
            ReferenceFrequency::Single(nu) => *nu,
            ReferenceFrequency::PerState(nus) => nus[state.index()],
        }
    }

    /// Number of polarisation states carried (1 or 3).
    #[inline]
    pub fn states(&self) -> usize {
        match self {
            ReferenceFrequency::Single(_) => 1,
            ReferenceFrequency::PerState(_) => 3,
        }
    }
}

fn validated(value: f64, unit: FrequencyUnit) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(unit.to_hz(value))
    } else {
        Err(ModelError::InvalidReferenceFrequency { value })
    }
}
