//! # bandpass_core: Numeric Foundation for Bandpass Integration
//!
//! ## Layer 1 (Foundation) Role
//!
//! bandpass_core is the bottom layer of the workspace, providing:
//! - Frequency axes and frequency units (`types::frequency`)
//! - Polarisation states I, Q, U (`types::stokes`)
//! - Spectral parameter units (`types::units`)
//! - Error types: `AxisError`, `IntegrationError`, `InterpolationError`,
//!   `EmissionError`, `UnitError` (`types::error`)
//! - Trapezoid-rule integration and uniform sampling (`math::integration`)
//! - Linear, natural cubic and bicubic spline interpolation (`math::interpolators`)
//! - The emission-law calling contract `FreqScaling` and the
//!   `IntensityDerivative` contract used for unit conversion (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bandpass_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bandpass_core::math::integration::{linspace, trapz};
//! use bandpass_core::types::{FrequencyAxis, FrequencyUnit};
//!
//! let freqs = FrequencyAxis::new(vec![10.0, 20.0, 30.0], FrequencyUnit::GHz).unwrap();
//! assert_eq!(freqs.len(), 3);
//!
//! let xs: Vec<f64> = linspace(0.0, 1.0, 11);
//! let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x).collect();
//! let area = trapz(&ys, &xs).unwrap();
//! # assert!((area - 1.0_f64).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for frequency units and parameter units

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
