//! Interpolation grid construction.
//!
//! The grid decides which strategy runs: its dimensionality is the number of
//! spatially varying parameters, and each varying parameter gets a uniform
//! sample sequence spanning the range of its per-pixel values.

use crate::config::IntegrationConfig;
use crate::error::BandpassError;
use crate::parameters::SpectralParameterSet;
use bandpass_core::math::integration::linspace;
use tracing::{debug, warn};

/// Largest number of spatially varying parameters any strategy handles.
pub const MAX_DIMENSIONALITY: usize = 2;

/// Uniform samples of one spatially varying parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxis {
    name: String,
    values: Vec<f64>,
}

impl GridAxis {
    /// `n` samples spanning `[min, max]`, both ends included.
    pub fn new(name: impl Into<String>, min: f64, max: f64, n: usize) -> Self {
        Self {
            name: name.into(),
            values: linspace(min, max, n),
        }
    }

    /// Name of the sampled parameter.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in increasing order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for an axis without samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First sample.
    pub fn min(&self) -> f64 {
        self.values.first().copied().unwrap_or(f64::NAN)
    }

    /// Last sample.
    pub fn max(&self) -> f64 {
        self.values.last().copied().unwrap_or(f64::NAN)
    }

    /// True when the samples are not strictly increasing.
    ///
    /// This covers a parameter that takes a single value everywhere as well
    /// as a range too narrow for `len()` distinct `f64` samples. Either way
    /// the axis cannot carry an interpolant.
    pub fn is_degenerate(&self) -> bool {
        self.values.windows(2).any(|w| !(w[1] > w[0]))
    }
}

/// Sample sequences for every spatially varying parameter, in insertion
/// order of the parameter set.
///
/// An empty grid selects the 0D strategy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterpolationGrid {
    axes: Vec<GridAxis>,
}

impl InterpolationGrid {
    /// Grid without axes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of axes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.axes.len()
    }

    /// True for the 0D grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axes in parameter order.
    #[inline]
    pub fn axes(&self) -> &[GridAxis] {
        &self.axes
    }

    /// Axis of parameter `name`.
    pub fn get(&self, name: &str) -> Option<&GridAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }
}

/// Build the interpolation grid with the default grid sizes.
///
/// # Example
///
/// ```
/// use bandpass_core::types::ParameterUnit;
/// use bandpass_integration::{build_grid, SpectralParameter, SpectralParameterSet};
///
/// let params = SpectralParameterSet::new()
///     .with("beta", SpectralParameter::map(vec![-3.2, -3.0, -2.8, -3.1], ParameterUnit::Dimensionless))
///     .unwrap()
///     .with("T", SpectralParameter::constant(20.0, ParameterUnit::Kelvin))
///     .unwrap();
///
/// let grid = build_grid(&params).unwrap();
/// assert_eq!(grid.dim(), 1);
///
/// let beta = grid.get("beta").unwrap();
/// assert_eq!(beta.len(), 1000);
/// assert_eq!((beta.min(), beta.max()), (-3.2, -2.8));
/// assert!(grid.get("T").is_none());
/// ```
pub fn build_grid(params: &SpectralParameterSet) -> Result<InterpolationGrid, BandpassError> {
    build_grid_with(params, &IntegrationConfig::default())
}

/// Build the interpolation grid with the grid sizes of `config`.
///
/// Fails with `BandpassError::UnsupportedDimensionality` when more than
/// [`MAX_DIMENSIONALITY`] parameters vary.
pub fn build_grid_with(
    params: &SpectralParameterSet,
    config: &IntegrationConfig,
) -> Result<InterpolationGrid, BandpassError> {
    let dim = params.dimensionality();
    if dim == 0 {
        return Ok(InterpolationGrid::empty());
    }

    let n = config
        .grid_points(dim)
        .ok_or(BandpassError::UnsupportedDimensionality {
            dim,
            max: MAX_DIMENSIONALITY,
        })?;

    let axes: Vec<GridAxis> = params
        .varying()
        .map(|(name, param)| {
            let (min, max) = param.range();
            let axis = GridAxis::new(name, min, max, n);
            if axis.is_degenerate() {
                warn!(
                    parameter = name,
                    min,
                    max,
                    "spatially varying parameter range too narrow for a grid"
                );
            }
            axis
        })
        .collect();

    debug!(dim, points_per_axis = n, "built interpolation grid");
    Ok(InterpolationGrid { axes })
}
