//! Physical units of spectral parameters.

use super::error::UnitError;
use super::frequency::FrequencyUnit;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit attached to a spectral parameter.
///
/// Emission laws declare the unit they expect for each parameter and the
/// engine rejects parameters supplied in any other unit.
///
/// # Example
///
/// ```
/// use bandpass_core::types::{FrequencyUnit, ParameterUnit};
///
/// assert_eq!("K".parse::<ParameterUnit>().unwrap(), ParameterUnit::Kelvin);
/// assert_eq!(
///     "GHz".parse::<ParameterUnit>().unwrap(),
///     ParameterUnit::Frequency(FrequencyUnit::GHz)
/// );
/// assert_eq!(ParameterUnit::Dimensionless.to_string(), "dimensionless");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParameterUnit {
    /// Pure number (spectral indices)
    #[default]
    Dimensionless,
    /// Temperature in kelvin
    Kelvin,
    /// Frequency (peak or reference frequencies)
    Frequency(FrequencyUnit),
}

impl fmt::Display for ParameterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterUnit::Dimensionless => write!(f, "dimensionless"),
            ParameterUnit::Kelvin => write!(f, "K"),
            ParameterUnit::Frequency(unit) => write!(f, "{}", unit),
        }
    }
}

impl FromStr for ParameterUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "dimensionless" | "1" => Ok(ParameterUnit::Dimensionless),
            "K" | "k" => Ok(ParameterUnit::Kelvin),
            other => other
                .parse::<FrequencyUnit>()
                .map(ParameterUnit::Frequency)
                .map_err(|_| UnitError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dimensionless() {
        assert_eq!(ParameterUnit::default(), ParameterUnit::Dimensionless);
        assert_eq!("".parse::<ParameterUnit>().unwrap(), ParameterUnit::Dimensionless);
    }

    #[test]
    fn test_unknown_unit() {
        let err = "lightyear".parse::<ParameterUnit>().unwrap_err();
        assert_eq!(err, UnitError::Unknown("lightyear".to_string()));
    }

    #[test]
    fn test_display_roundtrip() {
        for unit in [
            ParameterUnit::Dimensionless,
            ParameterUnit::Kelvin,
            ParameterUnit::Frequency(FrequencyUnit::MHz),
        ] {
            assert_eq!(unit.to_string().parse::<ParameterUnit>().unwrap(), unit);
        }
    }
}
