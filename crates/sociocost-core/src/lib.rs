//! sociocost-core: shared foundation for the social-media cost model
//!
//! This crate provides the non-engine building blocks:
//! - Params: the nine parameter identifiers, research metadata, value sets
//! - Types: cost-result snapshots shared across engines and events
//! - Errors: validation, calculation, and scenario error taxonomy
//! - Events: synchronous observer registry with panic isolation
//! - Config: tunable model configuration
//! - Tracing: logging setup
//! - Constants: research and shape constants

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod params;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::ModelConfig;
pub use errors::{CalcError, CostErrorCode, ScenarioError, ValidationError};
pub use events::{
    EventDispatcher, ModelEventHandler, ParameterChangedEvent, ScenarioAppliedEvent,
    SignificantChangeEvent, UpdateRejectedEvent,
};
pub use params::{DistributionKind, ParameterId, ParameterMeta, ParameterSet, ResearchRange};
pub use types::{CommunityImpact, CostFormulas, CostResult};
