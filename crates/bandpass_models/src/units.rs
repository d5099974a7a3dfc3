//! Radiometric units.
//!
//! Sky maps are stored in brightness temperature (K_RJ), thermodynamic
//! temperature (K_CMB) or specific intensity (Jy/sr), each with an optional
//! SI prefix. A unit's [`IntensityDerivative`] is `dI/dX` in
//! W m⁻² Hz⁻¹ sr⁻¹ per unit of `X`, which is what bandpass unit-conversion
//! coefficients integrate.
//!
//! # Example
//!
//! ```
//! use bandpass_core::traits::IntensityDerivative;
//! use bandpass_models::units::{RadiometricUnit, UnitConvention, UnitPrefix};
//!
//! let unit: RadiometricUnit = "uK_CMB".parse().unwrap();
//! assert_eq!(unit.convention(), UnitConvention::Cmb);
//! assert_eq!(unit.prefix(), UnitPrefix::Micro);
//! assert_eq!(unit.to_string(), "uK_CMB");
//!
//! let mjy: RadiometricUnit = "MJy/sr".parse().unwrap();
//! assert!((mjy.intensity_derivative(100.0e9) - 1.0e-20).abs() < 1e-32);
//! ```

use crate::constants::{C, H, K_B, T_CMB};
use crate::emission::planck_derivative_factor;
use bandpass_core::traits::IntensityDerivative;
use bandpass_core::types::UnitError;
use std::fmt;
use std::str::FromStr;

/// One jansky [W m⁻² Hz⁻¹].
const JANSKY: f64 = 1.0e-26;

/// Physical quantity a map is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitConvention {
    /// Rayleigh-Jeans brightness temperature
    RayleighJeans,
    /// CMB thermodynamic temperature
    Cmb,
    /// Specific intensity in janskys per steradian
    Flux,
}

impl UnitConvention {
    fn symbol(&self) -> &'static str {
        match self {
            UnitConvention::RayleighJeans => "K_RJ",
            UnitConvention::Cmb => "K_CMB",
            UnitConvention::Flux => "Jy/sr",
        }
    }
}

/// SI prefix applied to a [`UnitConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitPrefix {
    /// 10⁻⁶
    Micro,
    /// 10⁻³
    Milli,
    /// 1
    #[default]
    Base,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
    /// 10⁹
    Giga,
}

impl UnitPrefix {
    /// Multiplier relative to the unprefixed unit.
    pub fn factor(&self) -> f64 {
        match self {
            UnitPrefix::Micro => 1e-6,
            UnitPrefix::Milli => 1e-3,
            UnitPrefix::Base => 1.0,
            UnitPrefix::Kilo => 1e3,
            UnitPrefix::Mega => 1e6,
            UnitPrefix::Giga => 1e9,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            UnitPrefix::Micro => "u",
            UnitPrefix::Milli => "m",
            UnitPrefix::Base => "",
            UnitPrefix::Kilo => "k",
            UnitPrefix::Mega => "M",
            UnitPrefix::Giga => "G",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "u" | "µ" | "μ" => Some(UnitPrefix::Micro),
            "m" => Some(UnitPrefix::Milli),
            "" => Some(UnitPrefix::Base),
            "k" => Some(UnitPrefix::Kilo),
            "M" => Some(UnitPrefix::Mega),
            "G" => Some(UnitPrefix::Giga),
            _ => None,
        }
    }
}

/// A prefixed radiometric unit such as `uK_RJ` or `MJy/sr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiometricUnit {
    prefix: UnitPrefix,
    convention: UnitConvention,
}

impl RadiometricUnit {
    /// K_RJ
    pub const K_RJ: Self = Self::new(UnitPrefix::Base, UnitConvention::RayleighJeans);
    /// K_CMB
    pub const K_CMB: Self = Self::new(UnitPrefix::Base, UnitConvention::Cmb);
    /// Jy/sr
    pub const JY_PER_SR: Self = Self::new(UnitPrefix::Base, UnitConvention::Flux);

    /// Combine a prefix and a convention.
    pub const fn new(prefix: UnitPrefix, convention: UnitConvention) -> Self {
        Self { prefix, convention }
    }

    /// SI prefix.
    #[inline]
    pub fn prefix(&self) -> UnitPrefix {
        self.prefix
    }

    /// Underlying convention.
    #[inline]
    pub fn convention(&self) -> UnitConvention {
        self.convention
    }
}

impl IntensityDerivative for RadiometricUnit {
    fn intensity_derivative(&self, freq_hz: f64) -> f64 {
        let base = match self.convention {
            UnitConvention::RayleighJeans => rayleigh_jeans_derivative(freq_hz),
            UnitConvention::Cmb => {
                rayleigh_jeans_derivative(freq_hz)
                    * planck_derivative_factor(H * freq_hz / (K_B * T_CMB))
            }
            UnitConvention::Flux => JANSKY,
        };
        base * self.prefix.factor()
    }
}

/// `2 k_B ν² / c²`
#[inline]
fn rayleigh_jeans_derivative(freq_hz: f64) -> f64 {
    2.0 * K_B * freq_hz * freq_hz / (C * C)
}

impl fmt::Display for RadiometricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.symbol(), self.convention.symbol())
    }
}

impl FromStr for RadiometricUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            UnitConvention::RayleighJeans,
            UnitConvention::Cmb,
            UnitConvention::Flux,
        ]
        .into_iter()
        .find_map(|convention| {
            trimmed
                .strip_suffix(convention.symbol())
                .and_then(UnitPrefix::parse)
                .map(|prefix| Self::new(prefix, convention))
        })
        .ok_or_else(|| UnitError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_display() {
        for text in ["K_RJ", "uK_RJ", "mK_CMB", "MJy/sr", "Jy/sr", "kJy/sr"] {
            let unit: RadiometricUnit = text.parse().unwrap();
            assert_eq!(unit.to_string(), text);
        }
        let micro: RadiometricUnit = "µK_CMB".parse().unwrap();
        assert_eq!(micro.to_string(), "uK_CMB");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "xK_RJ".parse::<RadiometricUnit>().unwrap_err(),
            UnitError::Unknown("xK_RJ".to_string())
        );
        assert!("K".parse::<RadiometricUnit>().is_err());
        assert!("".parse::<RadiometricUnit>().is_err());
    }

    #[test]
    fn test_cmb_approaches_rj_at_low_frequency() {
        let nu = 1.0e6;
        assert_relative_eq!(
            RadiometricUnit::K_CMB.intensity_derivative(nu),
            RadiometricUnit::K_RJ.intensity_derivative(nu),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_prefix_scales_derivative() {
        let nu = 100.0e9;
        let uk: RadiometricUnit = "uK_RJ".parse().unwrap();
        assert_relative_eq!(
            uk.intensity_derivative(nu),
            1e-6 * RadiometricUnit::K_RJ.intensity_derivative(nu),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_rj_derivative_value() {
        // 2 k ν² / c² at 100 GHz
        let expected = 2.0 * 1.380_649e-23 * 1.0e22 / (2.997_924_58e8_f64).powi(2);
        assert_relative_eq!(
            RadiometricUnit::K_RJ.intensity_derivative(100.0e9),
            expected,
            max_relative = 1e-14
        );
    }
}
