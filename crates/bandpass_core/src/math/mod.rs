//! Numerical primitives for bandpass integration.
//!
//! - [`integration`]: trapezoid-rule integration and uniform sampling
//! - [`interpolators`]: linear, natural cubic and bicubic spline interpolation

pub mod integration;
pub mod interpolators;
