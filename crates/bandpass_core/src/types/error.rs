//! Error types for structured error handling.
//!
//! This module provides:
//! - `AxisError`: Errors from frequency axis construction
//! - `IntegrationError`: Errors from trapezoid-rule integration
//! - `InterpolationError`: Errors from interpolation operations
//! - `EmissionError`: Errors raised by emission-law evaluators
//! - `UnitError`: Errors from unit parsing

use thiserror::Error;

/// Frequency axis construction errors.
///
/// # Examples
/// ```
/// use bandpass_core::types::AxisError;
///
/// let err = AxisError::NotIncreasing { index: 2 };
/// assert_eq!(format!("{}", err), "Frequencies must be strictly increasing (violated at index 2)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Fewer samples than an integral needs.
    #[error("Insufficient frequency samples: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of samples provided
        got: usize,
        /// Minimum number of samples required
        need: usize,
    },

    /// A sample is not larger than its predecessor.
    #[error("Frequencies must be strictly increasing (violated at index {index})")]
    NotIncreasing {
        /// Index of the offending sample
        index: usize,
    },

    /// A sample is NaN, infinite, zero or negative.
    #[error("Frequency at index {index} must be finite and positive, got {value}")]
    InvalidFrequency {
        /// Index of the offending sample
        index: usize,
        /// The offending value
        value: f64,
    },
}

/// Trapezoid-rule integration errors.
///
/// # Examples
/// ```
/// use bandpass_core::types::IntegrationError;
///
/// let err = IntegrationError::LengthMismatch { xs: 3, ys: 2 };
/// assert_eq!(format!("{}", err), "Sample length mismatch: 3 abscissae, 2 ordinates");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    /// Abscissae and ordinates differ in length.
    #[error("Sample length mismatch: {xs} abscissae, {ys} ordinates")]
    LengthMismatch {
        /// Number of abscissae
        xs: usize,
        /// Number of ordinates
        ys: usize,
    },

    /// Too few samples for the trapezoid rule.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

/// Categorised interpolation errors.
///
/// # Examples
/// ```
/// use bandpass_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert_eq!(format!("{}", err), "Insufficient data points: got 1, need at least 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knots are not strictly increasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while evaluating an emission law.
///
/// # Examples
/// ```
/// use bandpass_core::types::EmissionError;
///
/// let err = EmissionError::MissingParameter("beta".to_string());
/// assert_eq!(format!("{}", err), "Missing spectral parameter: beta");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmissionError {
    /// A parameter the law needs was not supplied.
    #[error("Missing spectral parameter: {0}")]
    MissingParameter(String),

    /// A parameter value lies outside the law's physical domain.
    #[error("Invalid value {value} for spectral parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Offending value
        value: f64,
        /// Why the value is rejected
        reason: String,
    },

    /// The law produced a curve of the wrong length.
    #[error("Emission curve has {got} samples, frequency axis has {expected}")]
    CurveLength {
        /// Samples produced
        got: usize,
        /// Samples expected
        expected: usize,
    },
}

/// Unit parsing errors.
///
/// # Examples
/// ```
/// use bandpass_core::types::UnitError;
///
/// let err = UnitError::Unknown("furlong".to_string());
/// assert_eq!(format!("{}", err), "Unknown unit: furlong");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The unit string is not recognised.
    #[error("Unknown unit: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_error_display() {
        let err = AxisError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Insufficient frequency samples: got 1, need at least 2"
        );

        let err = AxisError::InvalidFrequency {
            index: 0,
            value: -1.0,
        };
        assert!(format!("{}", err).contains("-1"));
    }

    #[test]
    fn test_interpolation_error_out_of_bounds_display() {
        let err = InterpolationError::OutOfBounds {
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            format!("{}", err),
            "Query point 5 outside valid domain [0, 3]"
        );
    }

    #[test]
    fn test_interpolation_error_non_monotonic_display() {
        let err = InterpolationError::NonMonotonicData { index: 3 };
        assert_eq!(format!("{}", err), "Data is not monotonic at index 3");
    }

    #[test]
    fn test_emission_error_invalid_parameter_display() {
        let err = EmissionError::InvalidParameter {
            name: "T".to_string(),
            value: -3.0,
            reason: "temperature must be positive".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("T"));
        assert!(msg.contains("-3"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &IntegrationError::InsufficientData { got: 1, need: 2 };
        let _: &dyn std::error::Error = &EmissionError::CurveLength {
            got: 1,
            expected: 2,
        };
        let _: &dyn std::error::Error = &UnitError::Unknown("x".to_string());
    }

    #[test]
    fn test_error_clone_and_equality() {
        let err1 = AxisError::NotIncreasing { index: 4 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
