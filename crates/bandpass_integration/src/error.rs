//! Error types for bandpass integration.

use bandpass_core::types::{
    AxisError, EmissionError, IntegrationError, InterpolationError, ParameterUnit,
};
use thiserror::Error;

/// Errors surfaced by the bandpass integration engine.
///
/// Validation failures are detected before any emission-law evaluation.
/// Failures of the numerical primitives and of the emission law itself are
/// wrapped unchanged.
///
/// # Examples
///
/// ```
/// use bandpass_integration::BandpassError;
///
/// let err = BandpassError::UnsupportedDimensionality { dim: 3, max: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Bandpass integration over 3 spatially varying parameters is not supported (maximum 2)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandpassError {
    /// More spatially varying parameters than any strategy handles.
    #[error(
        "Bandpass integration over {dim} spatially varying parameters is not supported (maximum {max})"
    )]
    UnsupportedDimensionality {
        /// Number of spatially varying parameters
        dim: usize,
        /// Largest supported number
        max: usize,
    },

    /// A strategy was handed a grid of the wrong dimensionality.
    #[error("{strategy}D strategy cannot integrate over a {grid}-dimensional grid")]
    StrategyMismatch {
        /// Dimensionality handled by the strategy
        strategy: usize,
        /// Dimensionality of the grid
        grid: usize,
    },

    /// A grid axis does not correspond to a spatially varying parameter.
    #[error("Grid axis {0} does not match a spatially varying parameter")]
    GridMismatch(String),

    /// Bandpass weights and frequency axis differ in length.
    #[error("Bandpass has {weights} weights for {freqs} frequencies")]
    LengthMismatch {
        /// Number of frequency samples
        freqs: usize,
        /// Number of weights
        weights: usize,
    },

    /// A bandpass weight is negative or not finite.
    #[error("Bandpass weight at index {index} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Index of the offending weight
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A bandpass integral needed as a divisor is zero or not finite.
    #[error("Bandpass integral must be finite and non-zero, got {integral}")]
    DegenerateBandpass {
        /// The offending integral
        integral: f64,
    },

    /// Parameter values carry a state count other than 1 or 3.
    #[error("Spectral parameters carry 1 or 3 polarisation states, got {count}")]
    InvalidStateCount {
        /// Number of states supplied
        count: usize,
    },

    /// A per-pixel map is too short to be spatially varying.
    #[error("Map for spectral parameter {name} has {len} pixels, too few to vary spatially")]
    InvalidMapLength {
        /// Parameter name
        name: String,
        /// Pixels per state
        len: usize,
    },

    /// Per-pixel maps disagree on the number of pixels.
    #[error("Map for spectral parameter {name} has {got} pixels, expected {expected}")]
    InconsistentMapLength {
        /// Parameter name
        name: String,
        /// Pixels expected
        expected: usize,
        /// Pixels supplied
        got: usize,
    },

    /// A parameter value is NaN or infinite.
    #[error("Spectral parameter {name} contains non-finite values")]
    NonFiniteParameter {
        /// Parameter name
        name: String,
    },

    /// The emission law declares a parameter that was not supplied.
    #[error("Missing spectral parameter: {0}")]
    MissingParameter(String),

    /// A supplied parameter is not declared by the emission law.
    #[error("Unknown spectral parameter: {0}")]
    UnknownParameter(String),

    /// A parameter's unit differs from the declared one.
    #[error("Spectral parameter {name} is in {got}, expected {expected}")]
    UnitMismatch {
        /// Parameter name
        name: String,
        /// Declared unit
        expected: ParameterUnit,
        /// Supplied unit
        got: ParameterUnit,
    },

    /// A parameter carries more polarisation states than declared.
    #[error("Spectral parameter {name} carries {states} polarisation states, at most {max} allowed")]
    TooManyStates {
        /// Parameter name
        name: String,
        /// States supplied
        states: usize,
        /// States allowed
        max: usize,
    },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Frequency axis construction failed.
    #[error(transparent)]
    Axis(#[from] AxisError),

    /// Trapezoid integration failed.
    #[error(transparent)]
    Integration(#[from] IntegrationError),

    /// Interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// The emission law failed.
    #[error(transparent)]
    Emission(#[from] EmissionError),
}
