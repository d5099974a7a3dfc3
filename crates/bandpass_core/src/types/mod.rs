//! Core value types shared by every layer.
//!
//! This module provides:
//! - `frequency`: Frequency units and the strictly increasing `FrequencyAxis`
//! - `stokes`: Polarisation states (I, Q, U)
//! - `units`: Physical units of spectral parameters
//! - `error`: Structured error types for axes, integration, interpolation,
//!   emission-law evaluation and unit parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FrequencyAxis`], [`FrequencyUnit`] from `frequency`
//! - [`Stokes`] from `stokes`
//! - [`ParameterUnit`] from `units`
//! - [`AxisError`], [`EmissionError`], [`IntegrationError`],
//!   [`InterpolationError`], [`UnitError`] from `error`

pub mod error;
pub mod frequency;
pub mod stokes;
pub mod units;

// Re-export commonly used types at module level
pub use error::{AxisError, EmissionError, IntegrationError, InterpolationError, UnitError};
pub use frequency::{FrequencyAxis, FrequencyUnit};
pub use stokes::Stokes;
pub use units::ParameterUnit;
