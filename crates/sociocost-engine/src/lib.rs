//! sociocost-engine: societal cost-of-social-media estimation engines
//!
//! This crate provides the computational components of the model:
//! - Calculation: nine parameters to three cost components, total, GDP share
//! - Validation: hard research bounds and soft plausibility heuristics
//! - Distribution: display density curves and confidence intervals, cached
//! - Scenario: named presets and closest-scenario detection
//! - Store: exclusive owner of current parameter values
//! - Model: the explicit composition root wiring everything together

pub mod calculation;
pub mod distribution;
pub mod model;
pub mod scenario;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use calculation::{calculate_all, community_impact};
pub use distribution::{ConfidenceInterval, CurvePoint, DistributionCurve, DistributionModel};
pub use model::CostModel;
pub use scenario::{ClosestScenario, Scenario};
pub use store::ParameterStore;
pub use validation::{
    hard_bounds, hard_violations, validate_hard, validate_soft, validate_value, HardBounds,
    PlausibilityWarning, RangeViolation,
};

pub use sociocost_core::{
    CalcError, CommunityImpact, CostErrorCode, CostFormulas, CostResult, DistributionKind,
    ModelConfig, ParameterId, ParameterMeta, ParameterSet, ResearchRange, ScenarioError,
    ValidationError,
};
