//! Bounded curve cache with drop-oldest eviction.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use sociocost_core::params::ParameterId;

use super::curve::DistributionCurve;

/// Cache key: parameter, display size, and the bit pattern of the current
/// value. Bit-level equality is deliberate; two values that differ only in
/// the last ulp get separate entries rather than a false hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct CurveKey {
    pub parameter: ParameterId,
    pub width: u32,
    pub height: u32,
    pub value_bits: u64,
}

impl CurveKey {
    pub fn new(parameter: ParameterId, width: u32, height: u32, value: f64) -> Self {
        Self {
            parameter,
            width,
            height,
            value_bits: value.to_bits(),
        }
    }
}

/// Bounded insertion-order cache for computed curves.
///
/// Purely a performance optimization: eviction and wholesale clearing are
/// always safe, and callers must never depend on cache contents for
/// correctness.
#[derive(Debug)]
pub(super) struct CurveCache {
    map: FxHashMap<CurveKey, DistributionCurve>,
    order: VecDeque<CurveKey>,
    capacity: usize,
}

impl CurveCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::default(),
            order: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: &CurveKey) -> Option<&DistributionCurve> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: CurveKey, curve: DistributionCurve) {
        if self.map.insert(key, curve).is_none() {
            self.order.push_back(key);
        }
        while self.map.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::curve::ConfidenceInterval;

    fn dummy_curve() -> DistributionCurve {
        DistributionCurve {
            points: Vec::new(),
            confidence_interval: ConfidenceInterval {
                lower: 0.0,
                upper: 1.0,
            },
        }
    }

    #[test]
    fn test_evicts_oldest_beyond_capacity() {
        let mut cache = CurveCache::new(2);
        let k1 = CurveKey::new(ParameterId::Vsl, 100, 40, 13.7);
        let k2 = CurveKey::new(ParameterId::Vsl, 100, 40, 12.0);
        let k3 = CurveKey::new(ParameterId::Vsl, 100, 40, 11.0);

        cache.insert(k1, dummy_curve());
        cache.insert(k2, dummy_curve());
        cache.insert(k3, dummy_curve());

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&k1).is_none(), "oldest entry should be evicted");
        assert!(cache.get(&k2).is_some());
        assert!(cache.get(&k3).is_some());
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let mut cache = CurveCache::new(2);
        let k1 = CurveKey::new(ParameterId::Qol, 80, 30, 35.0);
        cache.insert(k1, dummy_curve());
        cache.insert(k1, dummy_curve());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_is_safe() {
        let mut cache = CurveCache::new(4);
        cache.insert(CurveKey::new(ParameterId::Yld, 50, 20, 6.0), dummy_curve());
        cache.clear();
        assert_eq!(cache.len(), 0);
        cache.insert(CurveKey::new(ParameterId::Yld, 50, 20, 6.0), dummy_curve());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_distinguish_value_bits() {
        let a = CurveKey::new(ParameterId::Vsl, 100, 40, 13.7);
        let b = CurveKey::new(ParameterId::Vsl, 100, 40, 13.700000000000001);
        assert_ne!(a, b);
    }
}
