//! Fit error types
//!
//! A fit error marks the model as unusable; callers drop the curve instead
//! of failing the whole recompute.

use thiserror::Error;

/// Result type alias for fitting operations
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors that can occur while fitting a curve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Too few points to determine the model
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Log-linearized fits need strictly positive values
    #[error("Non-positive value {value} at index {index}")]
    NonPositiveValue { index: usize, value: f64 },

    /// Normal equations could not be solved
    #[error("Singular system")]
    SingularSystem,

    /// Invalid fitter configuration
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = FitError::InsufficientData {
            required: 4,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 4 points, got 2"
        );
    }

    #[test]
    fn test_non_positive_display() {
        let error = FitError::NonPositiveValue { index: 0, value: 0.0 };
        assert_eq!(error.to_string(), "Non-positive value 0 at index 0");
    }

    #[test]
    fn test_singular_display() {
        assert_eq!(FitError::SingularSystem.to_string(), "Singular system");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = FitError::InvalidParameter {
            name: "order".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter 'order': must be at least 1");
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = FitError::SingularSystem;
        assert_eq!(error.clone(), FitError::SingularSystem);
        assert_ne!(
            error,
            FitError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_error_can_be_boxed() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(FitError::SingularSystem);
        assert_eq!(boxed.to_string(), "Singular system");
    }
}
