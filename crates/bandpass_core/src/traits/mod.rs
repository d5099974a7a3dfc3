//! Calling contracts between the integration engine and its collaborators.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Emission-law evaluation (`FreqScaling`) with its declared parameter
//!   schema (`ParameterSchema`, `ParameterSpec`) and evaluation input
//!   (`ParameterPoint`)
//! - Intensity derivatives of radiometric units (`IntensityDerivative`)
//!
//! Engine entry points are generic over these traits, so every call is
//! statically dispatched.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use bandpass_core::traits::Float;
///
/// fn power_law<T: Float>(nu: T, nu_ref: T, beta: T) -> T {
///     (nu / nu_ref).powf(beta)
/// }
///
/// let scaling: f64 = power_law(60.0, 30.0, -3.0);
/// assert!((scaling - 0.125).abs() < 1e-12);
/// ```
pub use num_traits::Float;

pub mod emission;
pub mod intensity;

pub use emission::{FreqScaling, ParameterPoint, ParameterSchema, ParameterSpec};
pub use intensity::IntensityDerivative;
