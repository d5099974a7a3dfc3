//! Frequency units and frequency axes.
//!
//! A [`FrequencyAxis`] is the abscissa of every bandpass integral: a strictly
//! increasing sequence of positive frequencies sharing one [`FrequencyUnit`].
//! Integrals are taken over the axis in its own unit, while emission laws
//! that need SI frequencies read them through [`FrequencyAxis::hz`].

use super::error::{AxisError, UnitError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frequency unit of an axis.
///
/// # Example
///
/// ```
/// use bandpass_core::types::FrequencyUnit;
///
/// let unit: FrequencyUnit = "GHz".parse().unwrap();
/// assert_eq!(unit, FrequencyUnit::GHz);
/// assert_eq!(unit.to_hz(30.0), 30.0e9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrequencyUnit {
    /// Hertz
    Hz,
    /// Kilohertz
    KHz,
    /// Megahertz
    MHz,
    /// Gigahertz
    GHz,
    /// Terahertz
    THz,
}

impl FrequencyUnit {
    /// Multiplicative factor converting this unit to hertz.
    #[inline]
    pub fn hz_factor(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1.0e3,
            FrequencyUnit::MHz => 1.0e6,
            FrequencyUnit::GHz => 1.0e9,
            FrequencyUnit::THz => 1.0e12,
        }
    }

    /// Convert a value in this unit to hertz.
    #[inline]
    pub fn to_hz(&self, value: f64) -> f64 {
        value * self.hz_factor()
    }

    /// Return the unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
            FrequencyUnit::THz => "THz",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for FrequencyUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            "thz" => Ok(FrequencyUnit::THz),
            _ => Err(UnitError::Unknown(s.to_string())),
        }
    }
}

/// Strictly increasing, positive frequency samples in a single unit.
///
/// At least 2 samples are required so that a trapezoid integral over the
/// axis is defined.
///
/// # Example
///
/// ```
/// use bandpass_core::types::{FrequencyAxis, FrequencyUnit};
///
/// let axis = FrequencyAxis::new(vec![10.0, 20.0, 30.0], FrequencyUnit::GHz).unwrap();
/// assert_eq!(axis.values(), &[10.0, 20.0, 30.0]);
/// assert_eq!(axis.hz().next(), Some(10.0e9));
///
/// // Decreasing samples are rejected
/// assert!(FrequencyAxis::new(vec![30.0, 20.0], FrequencyUnit::GHz).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    values: Vec<f64>,
    unit: FrequencyUnit,
}

impl FrequencyAxis {
    /// Construct an axis, validating positivity and strict ordering.
    ///
    /// # Returns
    ///
    /// * `Err(AxisError::InsufficientData)` - Fewer than 2 samples
    /// * `Err(AxisError::InvalidFrequency)` - A sample is non-finite or not positive
    /// * `Err(AxisError::NotIncreasing)` - Samples are not strictly increasing
    pub fn new(values: Vec<f64>, unit: FrequencyUnit) -> Result<Self, AxisError> {
        if values.len() < 2 {
            return Err(AxisError::InsufficientData {
                got: values.len(),
                need: 2,
            });
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(AxisError::InvalidFrequency { index, value });
            }
        }

        if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AxisError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { values, unit })
    }

    /// Returns the samples in the axis unit.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the axis unit.
    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the samples converted to hertz.
    pub fn hz(&self) -> impl Iterator<Item = f64> + '_ {
        let factor = self.unit.hz_factor();
        self.values.iter().map(move |&v| v * factor)
    }

    /// Return a copy of this axis expressed in another unit.
    pub fn to_unit(&self, unit: FrequencyUnit) -> Self {
        let factor = self.unit.hz_factor() / unit.hz_factor();
        Self {
            values: self.values.iter().map(|&v| v * factor).collect(),
            unit,
        }
    }
}
