//! Emission-law calling contract.
//!
//! An emission law maps frequencies and a set of named spectral parameter
//! values to a frequency-scaling curve. Each law declares the parameters it
//! consumes through a [`ParameterSchema`]: name, expected unit and how many
//! polarisation states the parameter may carry. The engine validates the
//! caller's parameters against this schema before evaluating anything.
//!
//! ## Example
//!
//! ```
//! use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
//! use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
//!
//! struct Tilt {
//!     schema: ParameterSchema,
//! }
//!
//! impl FreqScaling for Tilt {
//!     fn schema(&self) -> &ParameterSchema {
//!         &self.schema
//!     }
//!
//!     fn freq_scaling(
//!         &self,
//!         freqs: &FrequencyAxis,
//!         _state: Stokes,
//!         point: &ParameterPoint<'_>,
//!     ) -> Result<Vec<f64>, EmissionError> {
//!         let slope = point.require("slope")?;
//!         Ok(freqs.values().iter().map(|nu| 1.0 + slope * nu).collect())
//!     }
//! }
//!
//! let law = Tilt {
//!     schema: ParameterSchema::new(vec![ParameterSpec::new("slope", ParameterUnit::Dimensionless)]),
//! };
//! let freqs = FrequencyAxis::new(vec![1.0, 2.0], FrequencyUnit::GHz).unwrap();
//! let point = ParameterPoint::new().with("slope", 0.5);
//! assert_eq!(law.freq_scaling(&freqs, Stokes::I, &point).unwrap(), vec![1.5, 2.0]);
//! ```

use crate::types::{EmissionError, FrequencyAxis, ParameterUnit, Stokes};

/// Declaration of one spectral parameter consumed by an emission law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    name: String,
    unit: ParameterUnit,
    max_states: usize,
}

impl ParameterSpec {
    /// Declare a parameter that may carry one or three polarisation states.
    pub fn new(name: impl Into<String>, unit: ParameterUnit) -> Self {
        Self {
            name: name.into(),
            unit,
            max_states: 3,
        }
    }

    /// Restrict the parameter to a single polarisation state.
    pub fn intensity_only(mut self) -> Self {
        self.max_states = 1;
        self
    }

    /// Parameter name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected unit.
    #[inline]
    pub fn unit(&self) -> ParameterUnit {
        self.unit
    }

    /// Largest number of polarisation states the parameter may carry.
    #[inline]
    pub fn max_states(&self) -> usize {
        self.max_states
    }
}

/// Ordered set of parameter declarations for one emission law.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterSchema {
    specs: Vec<ParameterSpec>,
}

impl ParameterSchema {
    /// Build a schema from its declarations.
    pub fn new(specs: Vec<ParameterSpec>) -> Self {
        Self { specs }
    }

    /// Schema of a law without spectral parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Iterate over declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.specs.iter()
    }

    /// Number of declared parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True for laws without spectral parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Named scalar parameter values for a single emission-law evaluation.
///
/// Equality compares names and values, which lets the engine detect when two
/// polarisation states would evaluate the law with identical inputs.
///
/// # Example
///
/// ```
/// use bandpass_core::traits::ParameterPoint;
///
/// let mut point = ParameterPoint::new().with("beta", 1.5);
/// point.insert("T", 20.0);
/// point.insert("beta", 1.6);
///
/// assert_eq!(point.get("beta"), Some(1.6));
/// assert_eq!(point.len(), 2);
/// assert!(point.require("nu_p").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterPoint<'a> {
    entries: Vec<(&'a str, f64)>,
}

impl<'a> ParameterPoint<'a> {
    /// An empty point.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty point with room for `capacity` parameters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: &'a str, value: f64) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](ParameterPoint::insert).
    pub fn with(mut self, name: &'a str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, value)| value)
    }

    /// Value of `name`, or `EmissionError::MissingParameter`.
    pub fn require(&self, name: &str) -> Result<f64, EmissionError> {
        self.get(name)
            .ok_or_else(|| EmissionError::MissingParameter(name.to_string()))
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameters are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Frequency scaling of a sky component.
///
/// Implementations return one scaling value per sample of `freqs`. The
/// engine calls [`freq_scaling`](FreqScaling::freq_scaling) once per distinct
/// parameter instance (grid node and polarisation state), so implementations
/// only ever see scalar parameter values.
pub trait FreqScaling {
    /// Parameters this law consumes.
    fn schema(&self) -> &ParameterSchema;

    /// Number of polarisation states carried by the law's own reference data
    /// (for example a reference frequency per state). Either 1 or 3.
    ///
    /// When this is 1 the law's output depends on `state` only through the
    /// parameter values, and evaluations are shared between states whose
    /// parameter values coincide.
    fn reference_states(&self) -> usize {
        1
    }

    /// Evaluate the scaling curve over `freqs` for one polarisation state.
    fn freq_scaling(
        &self,
        freqs: &FrequencyAxis,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError>;
}

impl<L: FreqScaling + ?Sized> FreqScaling for &L {
    fn schema(&self) -> &ParameterSchema {
        (**self).schema()
    }

    fn reference_states(&self) -> usize {
        (**self).reference_states()
    }

    fn freq_scaling(
        &self,
        freqs: &FrequencyAxis,
        state: Stokes,
        point: &ParameterPoint<'_>,
    ) -> Result<Vec<f64>, EmissionError> {
        (**self).freq_scaling(freqs, state, point)
    }
}
