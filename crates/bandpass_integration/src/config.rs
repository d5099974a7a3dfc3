//! Integration configuration.
//!
//! Grid sizes for the interpolating strategies. The defaults reproduce the
//! mixing-matrix convention of 1000 samples for one varying parameter and a
//! 100 x 100 mesh for two.

use crate::error::BandpassError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of grid samples for one varying parameter.
pub const DEFAULT_ONE_D_GRID_POINTS: usize = 1000;

/// Default number of grid samples per axis for two varying parameters.
pub const DEFAULT_TWO_D_GRID_POINTS: usize = 100;

/// Grid sizes used by the interpolating strategies.
///
/// # Example
///
/// ```
/// use bandpass_integration::IntegrationConfig;
///
/// let config = IntegrationConfig::default();
/// assert_eq!(config.grid_points(1), Some(1000));
/// assert_eq!(config.grid_points(2), Some(100));
/// assert_eq!(config.grid_points(3), None);
///
/// let coarse = IntegrationConfig::new(50, 10).unwrap();
/// assert_eq!(coarse.one_d_grid_points, 50);
///
/// // A bicubic fit needs at least 4 samples per axis
/// assert!(IntegrationConfig::new(50, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntegrationConfig {
    /// Grid samples for one varying parameter
    pub one_d_grid_points: usize,
    /// Grid samples per axis for two varying parameters
    pub two_d_grid_points: usize,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            one_d_grid_points: DEFAULT_ONE_D_GRID_POINTS,
            two_d_grid_points: DEFAULT_TWO_D_GRID_POINTS,
        }
    }
}

impl IntegrationConfig {
    /// Smallest 1D grid: two samples define a line.
    pub const MIN_ONE_D_GRID_POINTS: usize = 2;

    /// Smallest 2D grid per axis for a natural bicubic fit.
    pub const MIN_TWO_D_GRID_POINTS: usize = 4;

    /// Create a validated configuration.
    pub fn new(one_d_grid_points: usize, two_d_grid_points: usize) -> Result<Self, BandpassError> {
        let config = Self {
            one_d_grid_points,
            two_d_grid_points,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check grid sizes against the minimum each strategy needs.
    pub fn validate(&self) -> Result<(), BandpassError> {
        if self.one_d_grid_points < Self::MIN_ONE_D_GRID_POINTS {
            return Err(BandpassError::InvalidConfig(format!(
                "one_d_grid_points must be at least {}, got {}",
                Self::MIN_ONE_D_GRID_POINTS,
                self.one_d_grid_points
            )));
        }
        if self.two_d_grid_points < Self::MIN_TWO_D_GRID_POINTS {
            return Err(BandpassError::InvalidConfig(format!(
                "two_d_grid_points must be at least {}, got {}",
                Self::MIN_TWO_D_GRID_POINTS,
                self.two_d_grid_points
            )));
        }
        Ok(())
    }

    /// Samples per grid axis for `dim` varying parameters.
    ///
    /// `None` for dimensionalities without an interpolating strategy.
    pub fn grid_points(&self, dim: usize) -> Option<usize> {
        match dim {
            1 => Some(self.one_d_grid_points),
            2 => Some(self.two_d_grid_points),
            _ => None,
        }
    }

    /// Parse and validate a configuration from TOML.
    ///
    /// Missing keys take their default values.
    ///
    /// ```
    /// use bandpass_integration::IntegrationConfig;
    ///
    /// let config = IntegrationConfig::from_toml_str("two_d_grid_points = 64").unwrap();
    /// assert_eq!(config.one_d_grid_points, 1000);
    /// assert_eq!(config.two_d_grid_points, 64);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, BandpassError> {
        let config: IntegrationConfig = toml::from_str(content)
            .map_err(|e| BandpassError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
