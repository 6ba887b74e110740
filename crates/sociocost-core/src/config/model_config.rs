//! Tunable model configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the cost model. Plain in-memory state: there is no file
/// loading or persistence, every session starts from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// National GDP in dollars, for the GDP-percentage readout.
    pub gdp: f64,
    /// National population, for community scaling and plausibility checks.
    pub national_population: f64,
    /// Relative total-cost delta above which `significant_change` fires.
    pub significant_change_threshold: f64,
    /// Bounded curve-cache capacity in entries.
    pub curve_cache_capacity: usize,
    /// Lower clamp on the per-curve sample count.
    pub min_curve_samples: usize,
    /// Upper clamp on the per-curve sample count.
    pub max_curve_samples: usize,
    /// Visual spread of the density curve as a fraction of the display range.
    pub spread_factor: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            gdp: constants::DEFAULT_GDP,
            national_population: constants::DEFAULT_NATIONAL_POPULATION,
            significant_change_threshold: constants::DEFAULT_SIGNIFICANT_CHANGE_THRESHOLD,
            curve_cache_capacity: constants::DEFAULT_CURVE_CACHE_CAPACITY,
            min_curve_samples: constants::MIN_CURVE_SAMPLES,
            max_curve_samples: constants::MAX_CURVE_SAMPLES,
            spread_factor: constants::SPREAD_FACTOR,
        }
    }
}
