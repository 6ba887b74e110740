//! Synchronous event dispatcher with panic isolation.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use super::handler::ModelEventHandler;
use super::types::*;

/// Registry of event handlers, dispatched synchronously in registration order.
///
/// A panicking handler is caught and logged; the remaining handlers still run.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ModelEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Registration order is dispatch order.
    pub fn register(&mut self, handler: Arc<dyn ModelEventHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_parameter_changed(&self, event: &ParameterChangedEvent) {
        self.dispatch("parameter_changed", |h| h.on_parameter_changed(event));
    }

    pub fn emit_significant_change(&self, event: &SignificantChangeEvent) {
        self.dispatch("significant_change", |h| h.on_significant_change(event));
    }

    pub fn emit_scenario_applied(&self, event: &ScenarioAppliedEvent) {
        self.dispatch("scenario_applied", |h| h.on_scenario_applied(event));
    }

    pub fn emit_update_rejected(&self, event: &UpdateRejectedEvent) {
        self.dispatch("update_rejected", |h| h.on_update_rejected(event));
    }

    fn dispatch<F>(&self, event_name: &'static str, mut call: F)
    where
        F: FnMut(&dyn ModelEventHandler),
    {
        for (i, handler) in self.handlers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| call(handler.as_ref())));
            if result.is_err() {
                tracing::warn!(
                    event = event_name,
                    handler_index = i,
                    "event handler panicked; continuing with remaining handlers"
                );
            }
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
