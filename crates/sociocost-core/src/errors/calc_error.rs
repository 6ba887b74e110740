//! Calculation engine errors.

use super::error_code::{self, CostErrorCode};
use crate::params::ParameterId;

/// Internal calculation failures. Never propagated to the UI layer; the model
/// converts them into the zeroed error result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("input {parameter} = {value} is not finite")]
    InvalidInput { parameter: ParameterId, value: f64 },

    #[error("component '{component}' produced a non-finite value")]
    NumericOverflow { component: &'static str },

    #[error("component '{component}' produced a negative cost: {value}")]
    NegativeComponent { component: &'static str, value: f64 },
}

impl CostErrorCode for CalcError {
    fn error_code(&self) -> &'static str {
        error_code::CALC_ERROR
    }
}
