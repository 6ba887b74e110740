//! Parameter store: exclusive owner of the current values and the last
//! calculated result.

use sociocost_core::params::{ParameterId, ParameterSet};
use sociocost_core::types::CostResult;

/// Owns the nine current parameter values plus the cached last result.
///
/// The store performs no validation itself; [`CostModel`](crate::model::CostModel)
/// guards every mutation at the boundary, so the values held here are always
/// within hard bounds.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    values: ParameterSet,
    last_result: CostResult,
}

impl ParameterStore {
    /// Start from the research-consensus defaults with no result yet.
    pub fn new() -> Self {
        Self {
            values: ParameterSet::defaults(),
            last_result: CostResult::error_result(),
        }
    }

    #[inline]
    pub fn get(&self, id: ParameterId) -> f64 {
        self.values.get(id)
    }

    pub(crate) fn set(&mut self, id: ParameterId, value: f64) {
        self.values.set(id, value);
    }

    pub(crate) fn merge(&mut self, partial: &[(ParameterId, f64)]) {
        self.values.merge(partial);
    }

    /// Snapshot of the current parameter set.
    pub fn snapshot(&self) -> ParameterSet {
        self.values
    }

    /// The most recently calculated result.
    pub fn last_result(&self) -> &CostResult {
        &self.last_result
    }

    pub(crate) fn cache_result(&mut self, result: CostResult) {
        self.last_result = result;
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_holds_defaults() {
        let store = ParameterStore::new();
        assert_eq!(store.snapshot(), ParameterSet::defaults());
        assert!(store.last_result().error, "no result cached yet");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = ParameterStore::new();
        let snapshot = store.snapshot();
        store.set(ParameterId::Vsl, 9.0);
        assert_eq!(snapshot.get(ParameterId::Vsl), 13.7);
        assert_eq!(store.get(ParameterId::Vsl), 9.0);
    }
}
