//! Uncertainty/distribution model.
//!
//! Produces a normalized density curve per parameter for visualization, plus
//! a confidence interval. Curves are cached in a bounded drop-oldest cache
//! keyed by `(parameter, width, height, value)`.

mod cache;
mod curve;

pub use curve::{ConfidenceInterval, CurvePoint, DistributionCurve};

use sociocost_core::constants::{DEFAULT_PROXIMITY, SKEW_LOWER_Z, SKEW_UPPER_Z, Z_95};
use sociocost_core::params::{DistributionKind, ParameterId};
use sociocost_core::ModelConfig;

use cache::{CurveCache, CurveKey};

/// Derives display curves and confidence intervals from parameter state.
///
/// Stateless over the values it is given, aside from the bounded curve cache.
#[derive(Debug)]
pub struct DistributionModel {
    config: ModelConfig,
    cache: CurveCache,
}

impl DistributionModel {
    pub fn new(config: ModelConfig) -> Self {
        let cache = CurveCache::new(config.curve_cache_capacity);
        Self { config, cache }
    }

    /// Compute (or fetch from cache) the density curve for a parameter at the
    /// given current value, sized for a `width`×`height` display area.
    ///
    /// `width` drives the sample count; `height` participates only in the
    /// cache key since `y` is peak-normalized and scaled by the caller.
    pub fn curve(
        &mut self,
        id: ParameterId,
        width: u32,
        height: u32,
        value: f64,
    ) -> DistributionCurve {
        let key = CurveKey::new(id, width, height, value);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let meta = id.meta();
        let samples = self.sample_count(width);
        let points = curve::sample_curve(
            meta.distribution,
            meta.display_min,
            meta.display_max,
            value,
            self.config.spread_factor,
            samples,
        );
        let computed = DistributionCurve {
            points,
            confidence_interval: self.confidence_interval(id, value),
        };

        self.cache.insert(key, computed.clone());
        computed
    }

    /// Confidence interval for a parameter at the given current value.
    ///
    /// Within 5% of the published default this returns the literature research
    /// range verbatim, so the "research range" and "likely range" never
    /// disagree at the consensus position. Away from the default the interval
    /// is derived from `std_dev = value × uncertainty_factor`.
    pub fn confidence_interval(&self, id: ParameterId, value: f64) -> ConfidenceInterval {
        let meta = id.meta();

        if meta.default_value != 0.0 {
            let proximity = ((value - meta.default_value) / meta.default_value).abs();
            if proximity <= DEFAULT_PROXIMITY {
                return ConfidenceInterval {
                    lower: meta.research_range.min,
                    upper: meta.research_range.max,
                };
            }
        }

        let std_dev = value * meta.uncertainty_factor;
        let (lower, upper) = match meta.distribution {
            DistributionKind::Normal => (value - Z_95 * std_dev, value + Z_95 * std_dev),
            DistributionKind::Skewed => {
                (value - SKEW_LOWER_Z * std_dev, value + SKEW_UPPER_Z * std_dev)
            }
        };

        let lower = lower.max(0.0);
        ConfidenceInterval {
            lower,
            upper: upper.max(lower),
        }
    }

    /// Number of cached curves.
    pub fn cached_curves(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached curve. Always safe; the next request recomputes.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn sample_count(&self, width: u32) -> usize {
        let derived = (width / sociocost_core::constants::PIXELS_PER_SAMPLE) as usize;
        derived.clamp(self.config.min_curve_samples, self.config.max_curve_samples)
    }
}
