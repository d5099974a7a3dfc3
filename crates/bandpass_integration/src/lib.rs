//! # bandpass_integration: Dimension-Adaptive Bandpass Integration
//!
//! ## Layer 3 (Engine) Role
//!
//! bandpass_integration turns an emission law and its spectral parameters
//! into bandpass-integrated scaling factors for one detector channel:
//! - Bandpasses, normalisation and unit-conversion coefficients (`bandpass`)
//! - Spectral parameters that may be constant, per state or per pixel (`parameters`)
//! - Interpolation grids over the spatially varying parameters (`grid`)
//! - 0D, 1D and 2D integration strategies (`strategy`)
//! - The `get_bandpass_scaling` entry point and `BandpassScaler` (`scaling`)
//! - Grid-size configuration (`config`) and results (`result`)
//!
//! ## Dependencies
//!
//! - bandpass_core (L1): frequency axes, integration, interpolation and the
//!   `FreqScaling` contract
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics
//! - serde/toml: Configuration loading and result serialisation (optional)
//!
//! Concrete emission laws and radiometric units live in bandpass_models (L2);
//! this crate depends only on the `FreqScaling` and `IntensityDerivative`
//! contracts, so any law implementing them can be integrated.
//!
//! ## Strategy Selection
//!
//! A parameter varies spatially when it holds more than three values. The
//! number of varying parameters picks the strategy:
//!
//! - 0: one exact integral per distinct state
//! - 1: integrals on a 1000-point grid, linearly interpolated per pixel
//! - 2: integrals on a 100×100 mesh, bicubic-interpolated per pixel
//! - 3 or more: rejected with `BandpassError::UnsupportedDimensionality`
//!
//! ## Usage Examples
//!
//! ```rust
//! use bandpass_core::traits::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
//! use bandpass_core::types::{EmissionError, FrequencyAxis, FrequencyUnit, ParameterUnit, Stokes};
//! use bandpass_integration::{get_bandpass_scaling, Bandpass, SpectralParameter, SpectralParameterSet};
//!
//! /// Emission proportional to frequency
//! struct Linear(ParameterSchema);
//!
//! impl FreqScaling for Linear {
//!     fn schema(&self) -> &ParameterSchema {
//!         &self.0
//!     }
//!
//!     fn freq_scaling(
//!         &self,
//!         freqs: &FrequencyAxis,
//!         _state: Stokes,
//!         point: &ParameterPoint<'_>,
//!     ) -> Result<Vec<f64>, EmissionError> {
//!         let amp = point.require("amp")?;
//!         Ok(freqs.values().iter().map(|nu| amp * nu).collect())
//!     }
//! }
//!
//! let law = Linear(ParameterSchema::new(vec![ParameterSpec::new("amp", ParameterUnit::Dimensionless)]));
//! let freqs = FrequencyAxis::new(vec![10.0, 20.0, 30.0], FrequencyUnit::GHz).unwrap();
//! let bandpass = Bandpass::new(freqs, vec![0.2, 0.6, 0.2]).unwrap();
//! let params = SpectralParameterSet::new()
//!     .with("amp", SpectralParameter::constant(1.0, ParameterUnit::Dimensionless))
//!     .unwrap();
//!
//! let scaling = get_bandpass_scaling(&bandpass, &law, &params).unwrap();
//! assert!((scaling.as_scalar().unwrap() - 160.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `IntegrationConfig` and `ScalingResult`, and
//!   `IntegrationConfig::from_toml_str`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod bandpass;
mod config;
mod error;
mod grid;
mod parameters;
mod result;
mod scaling;
pub mod strategy;

pub use bandpass::Bandpass;
pub use config::{IntegrationConfig, DEFAULT_ONE_D_GRID_POINTS, DEFAULT_TWO_D_GRID_POINTS};
pub use error::BandpassError;
pub use grid::{build_grid, build_grid_with, GridAxis, InterpolationGrid, MAX_DIMENSIONALITY};
pub use parameters::{ParameterValues, SpectralParameter, SpectralParameterSet};
pub use result::ScalingResult;
pub use scaling::{get_bandpass_scaling, BandpassScaler};
pub use strategy::BandpassIntegration;
