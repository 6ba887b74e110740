//! ModelEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing cost-model events.
///
/// All methods have no-op default implementations, so handlers only need to
/// override the events they care about. Dispatch is synchronous and in
/// registration order.
pub trait ModelEventHandler: Send + Sync {
    /// A parameter value was accepted and the model recalculated.
    fn on_parameter_changed(&self, _event: &ParameterChangedEvent) {}

    /// The total cost moved by more than the significant-change threshold.
    fn on_significant_change(&self, _event: &SignificantChangeEvent) {}

    /// A scenario preset was applied.
    fn on_scenario_applied(&self, _event: &ScenarioAppliedEvent) {}

    /// A parameter update was rejected at the store boundary.
    fn on_update_rejected(&self, _event: &UpdateRejectedEvent) {}
}
