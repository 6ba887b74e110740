//! The current values of all nine parameters.

use serde::{Deserialize, Serialize};

use super::ParameterId;

/// A full set of parameter values, indexed by [`ParameterId`].
///
/// `Default` yields the research-consensus point for every parameter. The set
/// itself enforces nothing beyond storage; hard-bound and finiteness checks
/// belong to the validation engine at the store boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    values: [f64; ParameterId::COUNT],
}

impl ParameterSet {
    /// All parameters at their research-consensus defaults.
    pub fn defaults() -> Self {
        let mut values = [0.0; ParameterId::COUNT];
        for p in ParameterId::ALL {
            values[p.index()] = p.meta().default_value;
        }
        Self { values }
    }

    #[inline]
    pub fn get(&self, id: ParameterId) -> f64 {
        self.values[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: ParameterId, value: f64) {
        self.values[id.index()] = value;
    }

    /// Overlay a partial set of values, leaving unnamed parameters untouched.
    pub fn merge(&mut self, partial: &[(ParameterId, f64)]) {
        for (id, value) in partial {
            self.set(*id, *value);
        }
    }

    /// Iterate `(id, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, f64)> + '_ {
        ParameterId::ALL.iter().map(|p| (*p, self.get(*p)))
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::defaults()
    }
}
