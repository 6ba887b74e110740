//! Named scenario presets.
//!
//! Scenarios are defined statically at startup and immutable; applying one
//! mutates the parameter store (via [`CostModel`](crate::model::CostModel)),
//! never the scenario definition. All preset values sit inside the hard
//! research bounds.

use serde::Serialize;

use sociocost_core::errors::ScenarioError;
use sociocost_core::params::{ParameterId, ParameterSet};

/// A named, fixed set of parameter values representing a research position.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    /// Partial value set; unnamed parameters are left untouched on apply.
    pub values: &'static [(ParameterId, f64)],
}

/// Closest-scenario report: advisory UI sugar, not used for calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosestScenario {
    pub name: &'static str,
    /// `1 - mean relative distance` over the scenario's keys, clamped to [0, 1].
    pub similarity: f64,
}

use ParameterId::*;

static RESET: Scenario = Scenario {
    name: "reset",
    description: "Research-consensus defaults for all nine parameters",
    values: &[
        (Vsl, 13.7),
        (Suicides, 110_000.0),
        (Attribution, 18.0),
        (Depression, 5_000_000.0),
        (Yld, 6.0),
        (Qol, 35.0),
        (Healthcare, 7_000.0),
        (Productivity, 6_000.0),
        (Duration, 4.5),
    ],
};

static CONSERVATIVE: Scenario = Scenario {
    name: "conservative",
    description: "Low end of every literature range; skeptical reading of the evidence",
    values: &[
        (Vsl, 9.0),
        (Suicides, 95_000.0),
        (Attribution, 8.0),
        (Depression, 3_500_000.0),
        (Yld, 5.0),
        (Qol, 31.0),
        (Healthcare, 6_500.0),
        (Productivity, 5_000.0),
        (Duration, 3.5),
    ],
};

static CONSENSUS: Scenario = Scenario {
    name: "consensus",
    description: "Midpoint literature values for the contested parameters",
    values: &[(Vsl, 11.5), (Attribution, 15.0), (Depression, 6_000_000.0)],
};

static WORST_CASE: Scenario = Scenario {
    name: "worst_case",
    description: "High end of every literature range; upper-bound cost estimate",
    values: &[
        (Vsl, 14.0),
        (Suicides, 250_000.0),
        (Attribution, 28.0),
        (Depression, 12_000_000.0),
        (Yld, 8.0),
        (Qol, 45.0),
        (Healthcare, 18_000.0),
        (Productivity, 9_500.0),
        (Duration, 8.0),
    ],
};

static HIGH_ATTRIBUTION: Scenario = Scenario {
    name: "high_attribution",
    description: "Strong causal-attribution position; other parameters untouched",
    values: &[(Attribution, 28.0), (Suicides, 150_000.0)],
};

static SCENARIOS: [&Scenario; 5] = [
    &RESET,
    &CONSERVATIVE,
    &CONSENSUS,
    &WORST_CASE,
    &HIGH_ATTRIBUTION,
];

/// All defined scenarios, in registration order.
pub fn all() -> &'static [&'static Scenario] {
    &SCENARIOS
}

/// Look up a scenario by name.
pub fn get(name: &str) -> Result<&'static Scenario, ScenarioError> {
    SCENARIOS
        .iter()
        .copied()
        .find(|s| s.name == name)
        .ok_or_else(|| ScenarioError::UnknownScenario {
            name: name.to_string(),
        })
}

/// Report which scenario the current parameter state is closest to.
///
/// `distance = Σ |current[k] − scenario[k]| / scenario[k]` over the
/// scenario's keys; the raw (unnormalized) minimum distance wins, and only
/// the reported `similarity = 1 − distance/key_count` divides by the key
/// count. Normalizing before the comparison would bias the pick toward
/// scenarios that name many parameters.
pub fn closest(current: &ParameterSet) -> ClosestScenario {
    let mut best: Option<(&'static Scenario, f64)> = None;

    for scenario in SCENARIOS {
        let mut distance = 0.0;
        for (id, preset) in scenario.values {
            if *preset != 0.0 {
                distance += (current.get(*id) - preset).abs() / preset;
            }
        }
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((scenario, distance)),
        }
    }

    // SCENARIOS is non-empty, so best is always set.
    let (scenario, distance) = best.expect("static scenario table is non-empty");
    let normalized = distance / scenario.values.len() as f64;
    ClosestScenario {
        name: scenario.name,
        similarity: (1.0 - normalized).clamp(0.0, 1.0),
    }
}
