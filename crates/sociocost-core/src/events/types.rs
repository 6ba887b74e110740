//! Event payload types.

use serde::Serialize;

use crate::params::{ParameterId, ParameterSet};
use crate::types::CostResult;

/// A single parameter value was accepted and the model recalculated.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterChangedEvent {
    pub parameter: ParameterId,
    pub old_value: f64,
    pub new_value: f64,
}

/// A parameter change moved the total cost by more than the configured
/// relative threshold.
#[derive(Debug, Clone, Serialize)]
pub struct SignificantChangeEvent {
    pub parameter: ParameterId,
    pub results: CostResult,
    /// `|new_total - old_total| / old_total`.
    pub delta_ratio: f64,
}

/// A named scenario preset replaced part of the parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioAppliedEvent {
    pub scenario_name: String,
    pub old_parameters: ParameterSet,
    pub new_parameters: ParameterSet,
}

/// A parameter update was rejected at the store boundary; the previous valid
/// value was retained.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRejectedEvent {
    pub parameter: ParameterId,
    pub value: f64,
    pub reason: String,
}
