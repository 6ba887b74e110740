//! Scenario manager errors.

use super::error_code::{self, CostErrorCode};

/// Errors raised when applying a named scenario.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{name}'")]
    UnknownScenario { name: String },
}

impl CostErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        error_code::SCENARIO_ERROR
    }
}
