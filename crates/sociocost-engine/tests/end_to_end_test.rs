//! End-to-end tests over the assembled model: default scenario numbers,
//! boundary rejection, curve access, and community scaling.

use sociocost_engine::{CostModel, ModelConfig, ParameterId, ValidationError};

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let delta = ((actual - expected) / expected).abs();
    assert!(
        delta <= rel,
        "expected {expected}, got {actual} (relative delta {delta})"
    );
}

#[test]
fn test_default_scenario_reference_numbers() {
    let model = CostModel::with_defaults();
    let r = model.results();

    assert_eq!(r.mortality, 271_260_000_000.0);
    assert_eq!(r.healthcare_productivity, 292_500_000_000.0);
    assert_close(r.mental_health, 1.918e12, 1e-4);
    assert_close(r.total, 2.48176e12, 1e-4);
    assert_close(r.gdp_percentage, 10.34, 1e-3);
}

#[test]
fn test_update_then_revert_reproduces_baseline() {
    let mut model = CostModel::with_defaults();
    let baseline = model.results().clone();

    model.update_parameter(ParameterId::Vsl, 10.0).unwrap();
    assert_ne!(model.results().total, baseline.total);

    model.update_parameter(ParameterId::Vsl, 13.7).unwrap();
    assert_eq!(model.results(), &baseline);
}

#[test]
fn test_vsl_out_of_bounds_cites_valid_range() {
    let mut model = CostModel::with_defaults();
    let err = model.update_parameter(ParameterId::Vsl, 25.0).unwrap_err();
    match err {
        ValidationError::RangeViolation { min, max, citation, .. } => {
            assert_eq!((min, max), (7.2, 14.0));
            assert!(!citation.is_empty());
        }
        other => panic!("expected RangeViolation, got {other:?}"),
    }
}

#[test]
fn test_confidence_interval_reconciles_at_default() {
    let model = CostModel::with_defaults();
    let meta = ParameterId::Vsl.meta();

    let ci = model.confidence_interval(ParameterId::Vsl);
    assert_eq!(ci.lower, meta.research_range.min);
    assert_eq!(ci.upper, meta.research_range.max);
}

#[test]
fn test_confidence_interval_dynamic_away_from_default() {
    let mut model = CostModel::with_defaults();
    model.update_parameter(ParameterId::Vsl, 10.0).unwrap();

    let ci = model.confidence_interval(ParameterId::Vsl);
    let std_dev = 10.0 * ParameterId::Vsl.meta().uncertainty_factor;
    assert_eq!(ci.lower, 10.0 - 1.96 * std_dev);
    assert_eq!(ci.upper, 10.0 + 1.96 * std_dev);
}

#[test]
fn test_curve_tracks_current_value() {
    let mut model = CostModel::with_defaults();
    let at_default = model.curve(ParameterId::Vsl, 400, 120);
    model.update_parameter(ParameterId::Vsl, 9.0).unwrap();
    let moved = model.curve(ParameterId::Vsl, 400, 120);

    let peak_x = |points: &[sociocost_engine::CurvePoint]| {
        points
            .iter()
            .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap())
            .unwrap()
            .x
    };
    assert!(peak_x(&at_default.points) > peak_x(&moved.points));
}

#[test]
fn test_community_impact_is_population_linear() {
    let model = CostModel::with_defaults();
    let national = model.results().clone();

    let small = model.community_impact(1_000_000.0, "Small Metro");
    let large = model.community_impact(10_000_000.0, "Large Metro");

    assert_close(large.total, small.total * 10.0, 1e-12);
    assert!(small.total < national.total);
    assert_eq!(small.region, "Small Metro");
}

#[test]
fn test_soft_warnings_never_block_calculation() {
    let mut model = CostModel::with_defaults();
    // Drive the state into warning territory: pessimistic chronicity
    model.update_parameter(ParameterId::Qol, 45.0).unwrap();
    model.update_parameter(ParameterId::Yld, 8.0).unwrap();

    let warnings = model.soft_warnings();
    assert!(!warnings.is_empty());
    assert!(!model.results().error, "warnings must not degrade the result");
}

#[test]
fn test_configurable_gdp_changes_percentage_only() {
    let default_model = CostModel::with_defaults();
    let custom = CostModel::new(ModelConfig {
        gdp: 12e12,
        ..ModelConfig::default()
    });

    assert_eq!(default_model.results().total, custom.results().total);
    assert_close(
        custom.results().gdp_percentage,
        default_model.results().gdp_percentage * 2.0,
        1e-12,
    );
}
