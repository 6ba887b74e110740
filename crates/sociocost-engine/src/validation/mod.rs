//! Parameter validation engine.
//!
//! Two distinct layers: *hard* research bounds that reject an update outright,
//! and *soft* cross-parameter plausibility heuristics that only warn. The hard
//! table is deliberately tighter than the display/slider range in the
//! parameter metadata; the slider may show territory the literature rules out.

mod types;

pub use types::{HardBounds, PlausibilityWarning, RangeViolation};

use sociocost_core::constants::LIFE_EXPECTANCY_YEARS;
use sociocost_core::errors::ValidationError;
use sociocost_core::params::{ParameterId, ParameterSet};
use sociocost_core::ModelConfig;

/// Healthcare cost above this fraction of the annual QALY value is flagged as
/// outsized.
const HEALTHCARE_QALY_RATIO: f64 = 0.10;

/// Soft thresholds for the pessimistic-chronicity heuristic.
const PESSIMISTIC_QOL: f64 = 40.0;
const PESSIMISTIC_YLD: f64 = 7.0;

/// Hard research bounds for a parameter.
///
/// The upstream literature carried several mutually inconsistent bound tables
/// (attribution appeared as both [5,30] and [7,22]); the [5,30] variant is
/// canonical here. See DESIGN.md.
pub fn hard_bounds(id: ParameterId) -> HardBounds {
    let (min, max) = match id {
        ParameterId::Vsl => (7.2, 14.0),
        ParameterId::Suicides => (89_000.0, 300_000.0),
        ParameterId::Attribution => (5.0, 30.0),
        ParameterId::Depression => (3_000_000.0, 15_000_000.0),
        ParameterId::Yld => (4.8, 8.2),
        ParameterId::Qol => (31.0, 47.0),
        ParameterId::Healthcare => (6_500.0, 20_000.0),
        ParameterId::Productivity => (4_800.0, 10_000.0),
        ParameterId::Duration => (3.0, 8.5),
    };
    HardBounds {
        min,
        max,
        citation: id.meta().citation,
    }
}

/// Validate a single value against finiteness and the hard bounds.
///
/// Non-finite values are rejected before any bound comparison so `NaN` never
/// reaches the calculation engine.
pub fn validate_value(id: ParameterId, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidInput {
            parameter: id,
            value,
        });
    }
    let bounds = hard_bounds(id);
    if value < bounds.min || value > bounds.max {
        return Err(ValidationError::RangeViolation {
            parameter: id,
            value,
            min: bounds.min,
            max: bounds.max,
            citation: bounds.citation,
        });
    }
    Ok(())
}

/// Validate a full parameter set, failing on the first violation in canonical
/// order.
pub fn validate_hard(params: &ParameterSet) -> Result<(), ValidationError> {
    for (id, value) in params.iter() {
        validate_value(id, value)?;
    }
    Ok(())
}

/// Collect every hard-bound violation in the set.
pub fn hard_violations(params: &ParameterSet) -> Vec<RangeViolation> {
    params
        .iter()
        .filter_map(|(id, value)| {
            if !value.is_finite() {
                return None;
            }
            let bounds = hard_bounds(id);
            (value < bounds.min || value > bounds.max).then(|| RangeViolation {
                parameter: id,
                value,
                min: bounds.min,
                max: bounds.max,
                citation: bounds.citation,
            })
        })
        .collect()
}

/// Cross-parameter plausibility heuristics. Advisory only; the returned
/// warnings must never block calculation.
pub fn validate_soft(params: &ParameterSet, config: &ModelConfig) -> Vec<PlausibilityWarning> {
    let mut warnings = Vec::new();

    let attribution = params.get(ParameterId::Attribution);
    let depression = params.get(ParameterId::Depression);
    if attribution > 0.0 {
        let implied = depression / (attribution / 100.0);
        if implied > config.national_population {
            warnings.push(PlausibilityWarning::ImpliedPopulationTooLarge {
                implied,
                national: config.national_population,
            });
        }
    }

    let annual_qaly = params.get(ParameterId::Vsl) * 1_000_000.0 / LIFE_EXPECTANCY_YEARS;
    let healthcare = params.get(ParameterId::Healthcare);
    if annual_qaly > 0.0 && healthcare > annual_qaly * HEALTHCARE_QALY_RATIO {
        warnings.push(PlausibilityWarning::HealthcareDwarfsQalyValue {
            healthcare,
            annual_qaly,
        });
    }

    let qol = params.get(ParameterId::Qol);
    let yld = params.get(ParameterId::Yld);
    if qol >= PESSIMISTIC_QOL && yld >= PESSIMISTIC_YLD {
        warnings.push(PlausibilityWarning::PessimisticChronicity { qol, yld });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_hard_validation() {
        assert!(validate_hard(&ParameterSet::defaults()).is_ok());
    }

    #[test]
    fn test_vsl_25_raises_range_violation() {
        let err = validate_value(ParameterId::Vsl, 25.0).unwrap_err();
        match err {
            ValidationError::RangeViolation {
                parameter,
                value,
                min,
                max,
                ..
            } => {
                assert_eq!(parameter, ParameterId::Vsl);
                assert_eq!(value, 25.0);
                assert_eq!((min, max), (7.2, 14.0));
            }
            other => panic!("expected RangeViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_rejected_before_bounds() {
        let err = validate_value(ParameterId::Qol, f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInput { .. }));
    }

    #[test]
    fn test_hard_violations_collects_all() {
        let mut params = ParameterSet::defaults();
        params.set(ParameterId::Vsl, 25.0);
        params.set(ParameterId::Duration, 0.5);
        let violations = hard_violations(&params);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].parameter, ParameterId::Vsl);
        assert_eq!(violations[1].parameter, ParameterId::Duration);
    }

    #[test]
    fn test_bounds_are_tighter_than_display_range() {
        for p in ParameterId::ALL {
            let b = hard_bounds(*p);
            let m = p.meta();
            assert!(b.min >= m.display_min, "{p}: hard min below display min");
            assert!(b.max <= m.display_max, "{p}: hard max above display max");
        }
    }

    #[test]
    fn test_implied_population_warning() {
        let mut params = ParameterSet::defaults();
        params.set(ParameterId::Depression, 15_000_000.0);
        params.set(ParameterId::Attribution, 5.0);
        // implied 300M, still under the 335M default
        assert!(validate_soft(&params, &ModelConfig::default()).iter().all(
            |w| !matches!(w, PlausibilityWarning::ImpliedPopulationTooLarge { .. })
        ));

        let tight = ModelConfig {
            national_population: 250_000_000.0,
            ..ModelConfig::default()
        };
        let warnings = validate_soft(&params, &tight);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, PlausibilityWarning::ImpliedPopulationTooLarge { .. })));
    }

    #[test]
    fn test_healthcare_dwarf_warning() {
        let mut params = ParameterSet::defaults();
        params.set(ParameterId::Vsl, 7.2);
        params.set(ParameterId::Healthcare, 19_000.0);
        // annual_qaly = 96,000; 19,000 > 9,600
        let warnings = validate_soft(&params, &ModelConfig::default());
        assert!(warnings
            .iter()
            .any(|w| matches!(w, PlausibilityWarning::HealthcareDwarfsQalyValue { .. })));
    }

    #[test]
    fn test_pessimistic_chronicity_warning() {
        let mut params = ParameterSet::defaults();
        params.set(ParameterId::Qol, 45.0);
        params.set(ParameterId::Yld, 8.0);
        let warnings = validate_soft(&params, &ModelConfig::default());
        assert!(warnings
            .iter()
            .any(|w| matches!(w, PlausibilityWarning::PessimisticChronicity { .. })));
    }

    #[test]
    fn test_soft_warnings_empty_at_defaults() {
        assert!(validate_soft(&ParameterSet::defaults(), &ModelConfig::default()).is_empty());
    }
}
