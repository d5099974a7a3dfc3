//! # Bandpass Models (L2: Physics)
//!
//! Reference emission laws and radiometric units.
//!
//! This crate provides:
//! - Physical constants in SI units (`constants`)
//! - Emission laws implementing `bandpass_core::traits::FreqScaling`:
//!   power law, modified blackbody, thermal CMB and closure-backed laws
//!   (`emission`)
//! - Radiometric units (K_RJ, K_CMB, Jy/sr and prefixed variants) with their
//!   intensity derivatives (`units`)
//!
//! ## Design Principles
//!
//! - **Declared schemas**: every law states its parameter names, units and
//!   polarisation arity up front
//! - **Enum-based dispatch** via [`emission::EmissionLaw`] for the built-in laws
//! - **SI internally**: laws read frequencies in hertz regardless of the
//!   axis unit

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod constants;
pub mod emission;
pub mod error;
pub mod units;

pub use error::ModelError;
