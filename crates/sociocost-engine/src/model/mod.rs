//! The model composition root.
//!
//! `CostModel` wires the parameter store, calculation engine, distribution
//! model, and event dispatcher into one explicit context object owned by the
//! caller. All operations are synchronous and complete within a single call
//! stack; rapid interactive updates should be coalesced by the caller, the
//! model performs no internal debouncing.

use std::sync::Arc;

use sociocost_core::errors::{ScenarioError, ValidationError};
use sociocost_core::events::{
    EventDispatcher, ModelEventHandler, ParameterChangedEvent, ScenarioAppliedEvent,
    SignificantChangeEvent, UpdateRejectedEvent,
};
use sociocost_core::params::{ParameterId, ParameterSet};
use sociocost_core::types::{CommunityImpact, CostResult};
use sociocost_core::ModelConfig;

use crate::calculation;
use crate::distribution::{ConfidenceInterval, DistributionCurve, DistributionModel};
use crate::scenario::{self, ClosestScenario};
use crate::store::ParameterStore;
use crate::validation::{self, PlausibilityWarning};

/// The assembled cost model.
pub struct CostModel {
    config: ModelConfig,
    store: ParameterStore,
    distribution: DistributionModel,
    dispatcher: EventDispatcher,
}

impl CostModel {
    /// Build a model from configuration and run the initial calculation over
    /// the default parameter set.
    pub fn new(config: ModelConfig) -> Self {
        let distribution = DistributionModel::new(config.clone());
        let mut model = Self {
            config,
            store: ParameterStore::new(),
            distribution,
            dispatcher: EventDispatcher::new(),
        };
        let initial = model.recalculate();
        model.store.cache_result(initial);
        model
    }

    /// Model with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ModelConfig::default())
    }

    /// Register an event handler. Registration order is dispatch order.
    pub fn subscribe(&mut self, handler: Arc<dyn ModelEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Update one parameter.
    ///
    /// Non-finite and out-of-hard-bounds values are rejected at this boundary;
    /// the previous valid value is retained and an `update_rejected` event is
    /// emitted. On success the model recalculates, emits `parameter_changed`,
    /// and emits `significant_change` when the total moved by more than the
    /// configured relative threshold.
    pub fn update_parameter(
        &mut self,
        id: ParameterId,
        value: f64,
    ) -> Result<CostResult, ValidationError> {
        if let Err(err) = validation::validate_value(id, value) {
            tracing::debug!(parameter = %id, value, %err, "parameter update rejected");
            self.dispatcher.emit_update_rejected(&UpdateRejectedEvent {
                parameter: id,
                value,
                reason: err.to_string(),
            });
            return Err(err);
        }

        let old_value = self.store.get(id);
        let old_total = self.store.last_result().total;

        self.store.set(id, value);
        let result = self.recalculate();
        self.store.cache_result(result.clone());

        self.dispatcher
            .emit_parameter_changed(&ParameterChangedEvent {
                parameter: id,
                old_value,
                new_value: value,
            });
        self.emit_if_significant(id, old_total, &result);

        Ok(result)
    }

    /// Update several parameters atomically: every entry is validated first
    /// and either all apply or none do, with a single recalculation.
    pub fn update_parameters(
        &mut self,
        partial: &[(ParameterId, f64)],
    ) -> Result<CostResult, ValidationError> {
        for (id, value) in partial {
            if let Err(err) = validation::validate_value(*id, *value) {
                self.dispatcher.emit_update_rejected(&UpdateRejectedEvent {
                    parameter: *id,
                    value: *value,
                    reason: err.to_string(),
                });
                return Err(err);
            }
        }

        let old = self.store.snapshot();
        let old_total = self.store.last_result().total;
        self.store.merge(partial);
        let result = self.recalculate();
        self.store.cache_result(result.clone());

        for (id, value) in partial {
            self.dispatcher
                .emit_parameter_changed(&ParameterChangedEvent {
                    parameter: *id,
                    old_value: old.get(*id),
                    new_value: *value,
                });
        }
        if let Some((id, _)) = partial.first() {
            self.emit_if_significant(*id, old_total, &result);
        }

        Ok(result)
    }

    /// Apply a named scenario preset atomically.
    ///
    /// Unknown names are a no-op beyond the returned error. Named parameters
    /// are replaced, unnamed parameters stay untouched, and a
    /// `scenario_applied` event carries the old and new parameter sets.
    pub fn apply_scenario(&mut self, name: &str) -> Result<CostResult, ScenarioError> {
        let preset = scenario::get(name)?;

        let old_parameters = self.store.snapshot();
        self.store.merge(preset.values);
        let result = self.recalculate();
        self.store.cache_result(result.clone());

        tracing::info!(scenario = preset.name, total = result.total, "scenario applied");
        self.dispatcher.emit_scenario_applied(&ScenarioAppliedEvent {
            scenario_name: preset.name.to_string(),
            old_parameters,
            new_parameters: self.store.snapshot(),
        });

        Ok(result)
    }

    /// Which preset the current state is closest to. Advisory only.
    pub fn closest_scenario(&self) -> ClosestScenario {
        scenario::closest(&self.store.snapshot())
    }

    /// Density curve for one parameter at its current value.
    pub fn curve(&mut self, id: ParameterId, width: u32, height: u32) -> DistributionCurve {
        let value = self.store.get(id);
        self.distribution.curve(id, width, height, value)
    }

    /// Confidence interval for one parameter at its current value.
    pub fn confidence_interval(&self, id: ParameterId) -> ConfidenceInterval {
        self.distribution
            .confidence_interval(id, self.store.get(id))
    }

    /// Advisory plausibility warnings for the current state.
    pub fn soft_warnings(&self) -> Vec<PlausibilityWarning> {
        validation::validate_soft(&self.store.snapshot(), &self.config)
    }

    /// Linear population scaling of the national result.
    pub fn community_impact(&self, population: f64, region: &str) -> CommunityImpact {
        calculation::community_impact(self.store.last_result(), population, region, &self.config)
    }

    /// The most recently calculated result.
    pub fn results(&self) -> &CostResult {
        self.store.last_result()
    }

    /// Snapshot of the current parameter values.
    pub fn parameters(&self) -> ParameterSet {
        self.store.snapshot()
    }

    /// Current value of one parameter.
    pub fn parameter(&self, id: ParameterId) -> f64 {
        self.store.get(id)
    }

    /// Run the calculation engine over the current state, degrading to the
    /// zeroed error result instead of propagating a calculation error.
    fn recalculate(&mut self) -> CostResult {
        match calculation::calculate_all(&self.store.snapshot(), &self.config) {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(%err, "calculation failed; returning zeroed error result");
                CostResult::error_result()
            }
        }
    }

    fn emit_if_significant(&self, id: ParameterId, old_total: f64, result: &CostResult) {
        if old_total.abs() < f64::EPSILON {
            return;
        }
        let delta_ratio = ((result.total - old_total) / old_total).abs();
        if delta_ratio > self.config.significant_change_threshold {
            self.dispatcher
                .emit_significant_change(&SignificantChangeEvent {
                    parameter: id,
                    results: result.clone(),
                    delta_ratio,
                });
        }
    }
}

impl std::fmt::Debug for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostModel")
            .field("parameters", &self.store.snapshot())
            .field("total", &self.store.last_result().total)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_calculates_defaults() {
        let model = CostModel::with_defaults();
        let r = model.results();
        assert!(!r.error);
        assert_eq!(r.mortality, 271_260_000_000.0);
    }

    #[test]
    fn test_rejected_update_retains_previous_value() {
        let mut model = CostModel::with_defaults();
        let before = model.results().clone();

        let err = model.update_parameter(ParameterId::Vsl, 25.0).unwrap_err();
        assert!(matches!(err, ValidationError::RangeViolation { .. }));
        assert_eq!(model.parameter(ParameterId::Vsl), 13.7);
        assert_eq!(model.results(), &before);
    }

    #[test]
    fn test_batch_update_is_atomic() {
        let mut model = CostModel::with_defaults();
        let err = model
            .update_parameters(&[
                (ParameterId::Vsl, 10.0),
                (ParameterId::Attribution, 99.0), // out of bounds
            ])
            .unwrap_err();
        assert!(matches!(err, ValidationError::RangeViolation { .. }));
        // The valid first entry must not have been applied
        assert_eq!(model.parameter(ParameterId::Vsl), 13.7);
    }

    #[test]
    fn test_nan_rejected_at_boundary() {
        let mut model = CostModel::with_defaults();
        let err = model
            .update_parameter(ParameterId::Depression, f64::NAN)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInput { .. }));
        assert!(!model.results().error);
    }
}
