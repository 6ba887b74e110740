//! Error taxonomy tests: display text, error codes, boundary strings.

use sociocost_core::errors::{CalcError, CostErrorCode, ScenarioError, ValidationError};
use sociocost_core::params::ParameterId;

#[test]
fn test_range_violation_carries_citation_and_bounds() {
    let err = ValidationError::RangeViolation {
        parameter: ParameterId::Vsl,
        value: 25.0,
        min: 7.2,
        max: 14.0,
        citation: ParameterId::Vsl.meta().citation,
    };

    let text = err.to_string();
    assert!(text.contains("vsl"), "missing parameter name: {text}");
    assert!(text.contains("25"), "missing offending value: {text}");
    assert!(text.contains("[7.2, 14]"), "missing valid range: {text}");
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.boundary_string().starts_with("[VALIDATION_ERROR]"));
}

#[test]
fn test_invalid_input_reports_parameter() {
    let err = ValidationError::InvalidInput {
        parameter: ParameterId::Depression,
        value: f64::NAN,
    };
    assert_eq!(err.parameter(), ParameterId::Depression);
    assert!(err.to_string().contains("depression"));
}

#[test]
fn test_calc_error_codes() {
    let err = CalcError::NumericOverflow {
        component: "mental_health",
    };
    assert_eq!(err.error_code(), "CALC_ERROR");
    assert!(err.to_string().contains("mental_health"));
}

#[test]
fn test_unknown_scenario_names_the_key() {
    let err = ScenarioError::UnknownScenario {
        name: "utopia".to_string(),
    };
    assert_eq!(err.error_code(), "SCENARIO_ERROR");
    assert_eq!(err.to_string(), "unknown scenario 'utopia'");
}
