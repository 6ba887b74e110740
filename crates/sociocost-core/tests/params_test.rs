//! Parameter metadata and set tests.

use sociocost_core::params::{DistributionKind, ParameterId, ParameterSet};

#[test]
fn test_nine_parameters() {
    assert_eq!(ParameterId::ALL.len(), ParameterId::COUNT);
    assert_eq!(ParameterId::COUNT, 9);
}

#[test]
fn test_research_consensus_defaults() {
    let set = ParameterSet::defaults();
    assert_eq!(set.get(ParameterId::Vsl), 13.7);
    assert_eq!(set.get(ParameterId::Suicides), 110_000.0);
    assert_eq!(set.get(ParameterId::Attribution), 18.0);
    assert_eq!(set.get(ParameterId::Depression), 5_000_000.0);
    assert_eq!(set.get(ParameterId::Yld), 6.0);
    assert_eq!(set.get(ParameterId::Qol), 35.0);
    assert_eq!(set.get(ParameterId::Healthcare), 7_000.0);
    assert_eq!(set.get(ParameterId::Productivity), 6_000.0);
    assert_eq!(set.get(ParameterId::Duration), 4.5);
}

#[test]
fn test_distribution_kinds_assigned() {
    assert_eq!(ParameterId::Vsl.meta().distribution, DistributionKind::Normal);
    assert_eq!(
        ParameterId::Attribution.meta().distribution,
        DistributionKind::Skewed
    );
}

#[test]
fn test_serde_round_trip() {
    let mut set = ParameterSet::defaults();
    set.set(ParameterId::Qol, 42.0);

    let json = serde_json::to_string(&set).unwrap();
    let back: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn test_parameter_id_serializes_snake_case() {
    let json = serde_json::to_string(&ParameterId::Healthcare).unwrap();
    assert_eq!(json, "\"healthcare\"");
}
