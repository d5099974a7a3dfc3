//! Spectral parameters supplied to the engine.
//!
//! A [`SpectralParameter`] holds one unit-bearing value array in one of four
//! shapes:
//!
//! | Shape | Elements | Meaning |
//! |---|---|---|
//! | [`ParameterValues::Constant`] | 1 | same value everywhere and in every state |
//! | [`ParameterValues::PerState`] | 3 | one constant per state I, Q, U |
//! | [`ParameterValues::Map`] | N | one value per pixel, shared by all states |
//! | [`ParameterValues::PolarizedMap`] | 3 x N | one map per state |
//!
//! A parameter is spatially varying iff it has more than 3 elements.
//! Parameters are collected in an insertion-ordered [`SpectralParameterSet`],
//! which validates shapes as they are inserted and checks the set against an
//! emission law's declared schema.

use crate::error::BandpassError;
use bandpass_core::traits::ParameterSchema;
use bandpass_core::types::{ParameterUnit, Stokes};

/// Values of one spectral parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValues {
    /// Spatially constant, shared by all states
    Constant(f64),
    /// Spatially constant, one value per state (I, Q, U)
    PerState([f64; 3]),
    /// One value per pixel, shared by all states
    Map(Vec<f64>),
    /// One map per state (I, Q, U), all of equal length
    PolarizedMap([Vec<f64>; 3]),
}

/// A spectral parameter: values plus the unit they are expressed in.
///
/// # Example
///
/// ```
/// use bandpass_core::types::{ParameterUnit, Stokes};
/// use bandpass_integration::SpectralParameter;
///
/// let beta = SpectralParameter::map(vec![-3.1, -3.0, -2.9, -3.05], ParameterUnit::Dimensionless);
/// assert!(beta.is_varying());
/// assert_eq!(beta.element_count(), 4);
/// assert_eq!(beta.range(), (-3.1, -2.9));
///
/// let t = SpectralParameter::per_state([20.0, 19.0, 19.0], ParameterUnit::Kelvin);
/// assert!(!t.is_varying());
/// assert_eq!(t.scalar(Stokes::Q), Some(19.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralParameter {
    unit: ParameterUnit,
    values: ParameterValues,
}

impl SpectralParameter {
    /// A spatially constant value shared by all states.
    pub fn constant(value: f64, unit: ParameterUnit) -> Self {
        Self {
            unit,
            values: ParameterValues::Constant(value),
        }
    }

    /// One spatially constant value per state.
    pub fn per_state(values: [f64; 3], unit: ParameterUnit) -> Self {
        Self {
            unit,
            values: ParameterValues::PerState(values),
        }
    }

    /// One value per pixel, shared by all states.
    pub fn map(values: Vec<f64>, unit: ParameterUnit) -> Self {
        Self {
            unit,
            values: ParameterValues::Map(values),
        }
    }

    /// One map per state.
    pub fn polarized_map(maps: [Vec<f64>; 3], unit: ParameterUnit) -> Self {
        Self {
            unit,
            values: ParameterValues::PolarizedMap(maps),
        }
    }

    /// Build from state rows: 1 row or 3 rows.
    ///
    /// Rows of a single element become constants, longer rows become maps.
    ///
    /// ```
    /// use bandpass_core::types::ParameterUnit;
    /// use bandpass_integration::{ParameterValues, SpectralParameter};
    ///
    /// let t = SpectralParameter::from_rows(vec![vec![20.0], vec![18.0], vec![18.0]], ParameterUnit::Kelvin).unwrap();
    /// assert_eq!(t.values(), &ParameterValues::PerState([20.0, 18.0, 18.0]));
    ///
    /// assert!(SpectralParameter::from_rows(vec![vec![1.0], vec![2.0]], ParameterUnit::Kelvin).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>, unit: ParameterUnit) -> Result<Self, BandpassError> {
        let values = match <[Vec<f64>; 3]>::try_from(rows) {
            Ok(rows) => {
                if rows.iter().all(|row| row.len() == 1) {
                    ParameterValues::PerState([rows[0][0], rows[1][0], rows[2][0]])
                } else {
                    ParameterValues::PolarizedMap(rows)
                }
            }
            Err(rows) => match <[Vec<f64>; 1]>::try_from(rows) {
                Ok([row]) if row.len() == 1 => ParameterValues::Constant(row[0]),
                Ok([row]) => ParameterValues::Map(row),
                Err(rows) => {
                    return Err(BandpassError::InvalidStateCount { count: rows.len() });
                }
            },
        };
        Ok(Self { unit, values })
    }

    /// Unit of the values.
    #[inline]
    pub fn unit(&self) -> ParameterUnit {
        self.unit
    }

    /// Raw values.
    #[inline]
    pub fn values(&self) -> &ParameterValues {
        &self.values
    }

    /// Total number of elements across all states.
    pub fn element_count(&self) -> usize {
        match &self.values {
            ParameterValues::Constant(_) => 1,
            ParameterValues::PerState(_) => 3,
            ParameterValues::Map(map) => map.len(),
            ParameterValues::PolarizedMap(maps) => maps.iter().map(Vec::len).sum(),
        }
    }

    /// True when the parameter varies across the sky.
    #[inline]
    pub fn is_varying(&self) -> bool {
        self.element_count() > 3
    }

    /// Number of polarisation states carried (1 or 3).
    pub fn states(&self) -> usize {
        match &self.values {
            ParameterValues::Constant(_) | ParameterValues::Map(_) => 1,
            ParameterValues::PerState(_) | ParameterValues::PolarizedMap(_) => 3,
        }
    }

    /// Pixels per state for maps, `None` for constants.
    pub fn npix(&self) -> Option<usize> {
        match &self.values {
            ParameterValues::Constant(_) | ParameterValues::PerState(_) => None,
            ParameterValues::Map(map) => Some(map.len()),
            ParameterValues::PolarizedMap(maps) => Some(maps[0].len()),
        }
    }

    /// Constant value seen by `state`, `None` for maps.
    #[inline]
    pub fn scalar(&self, state: Stokes) -> Option<f64> {
        match &self.values {
            ParameterValues::Constant(value) => Some(*value),
            ParameterValues::PerState(values) => Some(values[state.index()]),
            ParameterValues::Map(_) | ParameterValues::PolarizedMap(_) => None,
        }
    }

    /// Map seen by `state`, `None` for constants.
    #[inline]
    pub fn state_map(&self, state: Stokes) -> Option<&[f64]> {
        match &self.values {
            ParameterValues::Map(map) => Some(map),
            ParameterValues::PolarizedMap(maps) => Some(&maps[state.index()]),
            ParameterValues::Constant(_) | ParameterValues::PerState(_) => None,
        }
    }

    /// Iterate over every element in every state.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let slice: &[f64] = match &self.values {
            ParameterValues::Constant(value) => std::slice::from_ref(value),
            ParameterValues::PerState(values) => values,
            ParameterValues::Map(map) => map,
            ParameterValues::PolarizedMap(_) => &[],
        };
        let polarized: &[Vec<f64>] = match &self.values {
            ParameterValues::PolarizedMap(maps) => maps.as_slice(),
            _ => &[],
        };
        slice
            .iter()
            .chain(polarized.iter().flatten())
            .copied()
    }

    /// `(min, max)` over every element in every state.
    pub fn range(&self) -> (f64, f64) {
        self.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// Insertion-ordered mapping from parameter name to [`SpectralParameter`].
///
/// Insertion validates each parameter's shape and keeps every spatially
/// varying parameter at a common pixel count. Inserting an existing name
/// replaces its value in place.
///
/// # Example
///
/// ```
/// use bandpass_core::types::ParameterUnit;
/// use bandpass_integration::{SpectralParameter, SpectralParameterSet};
///
/// let params = SpectralParameterSet::new()
///     .with("beta", SpectralParameter::map(vec![1.5, 1.6, 1.55, 1.58], ParameterUnit::Dimensionless))
///     .unwrap()
///     .with("T", SpectralParameter::constant(20.0, ParameterUnit::Kelvin))
///     .unwrap();
///
/// assert_eq!(params.names().collect::<Vec<_>>(), vec!["beta", "T"]);
/// assert_eq!(params.dimensionality(), 1);
/// assert_eq!(params.npix(), Some(4));
///
/// // Maps of different lengths cannot be combined
/// let err = params.with("nu_p", SpectralParameter::map(vec![1.0; 5], ParameterUnit::Dimensionless));
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectralParameterSet {
    entries: Vec<(String, SpectralParameter)>,
}

impl SpectralParameterSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `param` under `name`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// * `Err(BandpassError::NonFiniteParameter)` - A value is NaN or infinite
    /// * `Err(BandpassError::InvalidMapLength)` - A map is too short to vary spatially
    /// * `Err(BandpassError::InconsistentMapLength)` - Maps disagree on pixel count
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        param: SpectralParameter,
    ) -> Result<(), BandpassError> {
        let name = name.into();
        validate_shape(&name, &param)?;

        if let Some(got) = param.npix() {
            let existing = self
                .entries
                .iter()
                .filter(|(n, _)| *n != name)
                .find_map(|(_, p)| p.npix());
            if let Some(expected) = existing {
                if expected != got {
                    return Err(BandpassError::InconsistentMapLength {
                        name,
                        expected,
                        got,
                    });
                }
            }
        }

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = param,
            None => self.entries.push((name, param)),
        }
        Ok(())
    }

    /// Builder form of [`insert`](SpectralParameterSet::insert).
    pub fn with(
        mut self,
        name: impl Into<String>,
        param: SpectralParameter,
    ) -> Result<Self, BandpassError> {
        self.insert(name, param)?;
        Ok(self)
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&SpectralParameter> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, param)| param)
    }

    /// Iterate over `(name, parameter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpectralParameter)> {
        self.entries
            .iter()
            .map(|(name, param)| (name.as_str(), param))
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Spatially varying parameters in insertion order.
    pub fn varying(&self) -> impl Iterator<Item = (&str, &SpectralParameter)> {
        self.iter().filter(|(_, param)| param.is_varying())
    }

    /// Number of spatially varying parameters.
    pub fn dimensionality(&self) -> usize {
        self.varying().count()
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

    /// Largest state count over all parameters (1 for an empty set).
    pub fn states(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, param)| param.states())
            .max()
            .unwrap_or(1)
    }

    /// Common pixel count of the spatially varying parameters.
    pub fn npix(&self) -> Option<usize> {
        self.entries.iter().find_map(|(_, param)| param.npix())
    }

    /// Check the set against an emission law's declared schema.
    ///
    /// Every declared parameter must be present in the declared unit with
    /// no more states than declared, and no undeclared parameter may be
    /// present.
    pub fn validate_against(&self, schema: &ParameterSchema) -> Result<(), BandpassError> {
        for spec in schema.iter() {
            let param = self
                .get(spec.name())
                .ok_or_else(|| BandpassError::MissingParameter(spec.name().to_string()))?;

            if param.unit() != spec.unit() {
                return Err(BandpassError::UnitMismatch {
                    name: spec.name().to_string(),
                    expected: spec.unit(),
                    got: param.unit(),
                });
            }

            if param.states() > spec.max_states() {
                return Err(BandpassError::TooManyStates {
                    name: spec.name().to_string(),
                    states: param.states(),
                    max: spec.max_states(),
                });
            }
        }

        if let Some(name) = self.names().find(|name| schema.get(name).is_none()) {
            return Err(BandpassError::UnknownParameter(name.to_string()));
        }

        Ok(())
    }
}

fn validate_shape(name: &str, param: &SpectralParameter) -> Result<(), BandpassError> {
    if param.iter().any(|v| !v.is_finite()) {
        return Err(BandpassError::NonFiniteParameter {
            name: name.to_string(),
        });
    }

    match param.values() {
        ParameterValues::Constant(_) | ParameterValues::PerState(_) => Ok(()),
        ParameterValues::Map(map) if map.len() <= 3 => Err(BandpassError::InvalidMapLength {
            name: name.to_string(),
            len: map.len(),
        }),
        ParameterValues::Map(_) => Ok(()),
        ParameterValues::PolarizedMap(maps) => {
            let expected = maps[0].len();
            if expected < 2 {
                return Err(BandpassError::InvalidMapLength {
                    name: name.to_string(),
                    len: expected,
                });
            }
            match maps.iter().find(|map| map.len() != expected) {
                Some(map) => Err(BandpassError::InconsistentMapLength {
                    name: name.to_string(),
                    expected,
                    got: map.len(),
                }),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandpass_core::traits::ParameterSpec;

    fn dimensionless_map(values: Vec<f64>) -> SpectralParameter {
        SpectralParameter::map(values, ParameterUnit::Dimensionless)
    }

    #[test]
    fn test_element_counts_and_varying() {
        let constant = SpectralParameter::constant(1.0, ParameterUnit::Dimensionless);
        let per_state = SpectralParameter::per_state([1.0, 2.0, 3.0], ParameterUnit::Dimensionless);
        let map = dimensionless_map(vec![1.0, 2.0, 3.0, 4.0]);
        let polarized = SpectralParameter::polarized_map(
            [vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            ParameterUnit::Dimensionless,
        );

        assert_eq!(
            [&constant, &per_state, &map, &polarized].map(|p| p.element_count()),
            [1, 3, 4, 6]
        );
        assert_eq!(
            [&constant, &per_state, &map, &polarized].map(|p| p.is_varying()),
            [false, false, true, true]
        );
        assert_eq!(polarized.states(), 3);
        assert_eq!(polarized.npix(), Some(2));
        assert_eq!(polarized.range(), (1.0, 6.0));
        assert_eq!(polarized.state_map(Stokes::U), Some(&[5.0, 6.0][..]));
        assert_eq!(map.state_map(Stokes::U), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn test_from_rows_shapes() {
        let unit = ParameterUnit::Dimensionless;
        assert_eq!(
            SpectralParameter::from_rows(vec![vec![2.0]], unit).unwrap(),
            SpectralParameter::constant(2.0, unit)
        );
        assert_eq!(
            SpectralParameter::from_rows(vec![vec![1.0; 5]], unit).unwrap(),
            SpectralParameter::map(vec![1.0; 5], unit)
        );
        assert_eq!(
            SpectralParameter::from_rows(vec![vec![1.0; 2]; 3], unit).unwrap(),
            SpectralParameter::polarized_map([vec![1.0; 2], vec![1.0; 2], vec![1.0; 2]], unit)
        );
        assert_eq!(
            SpectralParameter::from_rows(vec![], unit).unwrap_err(),
            BandpassError::InvalidStateCount { count: 0 }
        );
    }

    #[test]
    fn test_insert_rejects_short_and_ragged_maps() {
        let mut set = SpectralParameterSet::new();
        assert_eq!(
            set.insert("beta", dimensionless_map(vec![1.0, 2.0, 3.0])),
            Err(BandpassError::InvalidMapLength {
                name: "beta".to_string(),
                len: 3
            })
        );

        let ragged = SpectralParameter::polarized_map(
            [vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0]],
            ParameterUnit::Dimensionless,
        );
        assert_eq!(
            set.insert("beta", ragged),
            Err(BandpassError::InconsistentMapLength {
                name: "beta".to_string(),
                expected: 2,
                got: 1
            })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_rejects_non_finite() {
        let mut set = SpectralParameterSet::new();
        let result = set.insert("T", SpectralParameter::constant(f64::NAN, ParameterUnit::Kelvin));
        assert_eq!(
            result,
            Err(BandpassError::NonFiniteParameter {
                name: "T".to_string()
            })
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = SpectralParameterSet::new();
        set.insert("beta", dimensionless_map(vec![1.0; 4])).unwrap();
        set.insert("T", SpectralParameter::constant(20.0, ParameterUnit::Kelvin))
            .unwrap();
        // Replacing the only map may change the pixel count
        set.insert("beta", dimensionless_map(vec![1.0; 8])).unwrap();

        assert_eq!(set.names().collect::<Vec<_>>(), vec!["beta", "T"]);
        assert_eq!(set.npix(), Some(8));
    }

    #[test]
    fn test_states_is_maximum_over_parameters() {
        let set = SpectralParameterSet::new()
            .with("beta", dimensionless_map(vec![1.0; 4]))
            .unwrap();
        assert_eq!(set.states(), 1);

        let set = set
            .with(
                "T",
                SpectralParameter::per_state([20.0, 18.0, 18.0], ParameterUnit::Kelvin),
            )
            .unwrap();
        assert_eq!(set.states(), 3);
        assert_eq!(SpectralParameterSet::new().states(), 1);
    }

    #[test]
    fn test_validate_against_schema() {
        let schema = ParameterSchema::new(vec![
            ParameterSpec::new("beta", ParameterUnit::Dimensionless),
            ParameterSpec::new("T", ParameterUnit::Kelvin).intensity_only(),
        ]);

        let complete = SpectralParameterSet::new()
            .with("beta", dimensionless_map(vec![1.0; 4]))
            .unwrap()
            .with("T", SpectralParameter::constant(20.0, ParameterUnit::Kelvin))
            .unwrap();
        assert!(complete.validate_against(&schema).is_ok());

        let missing = SpectralParameterSet::new()
            .with("beta", dimensionless_map(vec![1.0; 4]))
            .unwrap();
        assert_eq!(
            missing.validate_against(&schema),
            Err(BandpassError::MissingParameter("T".to_string()))
        );

        let wrong_unit = complete
            .clone()
            .with("T", SpectralParameter::constant(20.0, ParameterUnit::Dimensionless))
            .unwrap();
        assert!(matches!(
            wrong_unit.validate_against(&schema),
            Err(BandpassError::UnitMismatch { .. })
        ));

        let too_many_states = complete
            .clone()
            .with(
                "T",
                SpectralParameter::per_state([20.0, 19.0, 19.0], ParameterUnit::Kelvin),
            )
            .unwrap();
        assert_eq!(
            too_many_states.validate_against(&schema),
            Err(BandpassError::TooManyStates {
                name: "T".to_string(),
                states: 3,
                max: 1
            })
        );

        let unknown = complete
            .with("nu_p", SpectralParameter::constant(1.0, ParameterUnit::Dimensionless))
            .unwrap();
        assert_eq!(
            unknown.validate_against(&schema),
            Err(BandpassError::UnknownParameter("nu_p".to_string()))
        );
    }
}
