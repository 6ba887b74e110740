//! Cost-calculation result snapshots.

use serde::{Deserialize, Serialize};

/// Human-readable formula strings with substituted values, one per component.
///
/// Presentation-layer sugar carried alongside the numbers so the UI never
/// reconstructs (and drifts from) the actual arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostFormulas {
    pub mortality: String,
    pub mental_health: String,
    pub healthcare_productivity: String,
}

impl CostFormulas {
    pub fn empty() -> Self {
        Self {
            mortality: String::new(),
            mental_health: String::new(),
            healthcare_productivity: String::new(),
        }
    }
}

/// Immutable snapshot of one full cost calculation, in dollars.
///
/// Invariant: `total == mortality + mental_health + healthcare_productivity`
/// within floating tolerance, and every component is non-negative whenever the
/// inputs were within hard bounds. A failed calculation is surfaced as the
/// zeroed [`CostResult::error_result`] instead of a thrown error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub mortality: f64,
    pub mental_health: f64,
    pub healthcare_productivity: f64,
    pub total: f64,
    pub gdp_percentage: f64,
    pub formulas: CostFormulas,
    /// True when this is the degraded fallback produced from a calculation
    /// error; all numeric fields are zero in that case.
    pub error: bool,
}

impl CostResult {
    /// The zeroed degraded result reported when calculation fails.
    pub fn error_result() -> Self {
        Self {
            mortality: 0.0,
            mental_health: 0.0,
            healthcare_productivity: 0.0,
            total: 0.0,
            gdp_percentage: 0.0,
            formulas: CostFormulas::empty(),
            error: true,
        }
    }
}

impl Default for CostResult {
    fn default() -> Self {
        Self::error_result()
    }
}

/// National cost scaled linearly to a community's population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityImpact {
    pub region: String,
    pub population: f64,
    /// The community's share of the national population, in [0, 1].
    pub population_share: f64,
    pub mortality: f64,
    pub mental_health: f64,
    pub healthcare_productivity: f64,
    pub total: f64,
}
