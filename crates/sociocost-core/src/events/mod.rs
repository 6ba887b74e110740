//! Event system for the cost model.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.

mod dispatcher;
mod handler;
mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ModelEventHandler;
pub use types::{
    ParameterChangedEvent, ScenarioAppliedEvent, SignificantChangeEvent, UpdateRejectedEvent,
};
