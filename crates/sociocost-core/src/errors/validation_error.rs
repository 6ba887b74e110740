//! Parameter validation errors.

use super::error_code::{self, CostErrorCode};
use crate::params::ParameterId;

/// Errors raised when a parameter update is rejected at the store boundary.
/// The previous valid value is always retained by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "{parameter} = {value} violates the hard research bounds [{min}, {max}] ({citation})"
    )]
    RangeViolation {
        parameter: ParameterId,
        value: f64,
        min: f64,
        max: f64,
        citation: &'static str,
    },

    #[error("{parameter} = {value} is not a finite number")]
    InvalidInput { parameter: ParameterId, value: f64 },
}

impl ValidationError {
    /// The parameter the rejected update targeted.
    pub fn parameter(&self) -> ParameterId {
        match self {
            Self::RangeViolation { parameter, .. } | Self::InvalidInput { parameter, .. } => {
                *parameter
            }
        }
    }
}

impl CostErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
