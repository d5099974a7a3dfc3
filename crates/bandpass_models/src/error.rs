//! Model construction errors.

use thiserror::Error;

/// Errors raised while constructing emission laws.
///
/// # Examples
///
/// ```
/// use bandpass_models::ModelError;
///
/// let err = ModelError::InvalidReferenceFrequency { value: -30.0 };
/// assert!(format!("{}", err).contains("-30"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Reference frequency is not finite and positive.
    #[error("Reference frequency must be finite and positive, got {value}")]
    InvalidReferenceFrequency {
        /// The rejected value
        value: f64,
    },

    /// Reference data carries an unsupported number of polarisation states.
    #[error("Reference data must carry 1 or 3 polarisation states, got {0}")]
    InvalidStateCount(usize),
}
