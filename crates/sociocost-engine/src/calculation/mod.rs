//! Cost calculation engine.
//!
//! Pure functions mapping a parameter set to the three cost components:
//!   mortality             = suicides × (attribution/100) × (vsl × 1e6)
//!   mental_health         = depression × yld × (qol/100) × annual_qaly
//!   healthcare_productivity = depression × (healthcare + productivity) × duration
//! where annual_qaly = (vsl × 1e6) / 75.
//!
//! Determinism matters here: doubling vsl must exactly double mortality and
//! mental_health, and attribution = 0 must force mortality to exactly 0, so
//! each formula is written as a plain product with no reordering or fused
//! intermediate terms.

use sociocost_core::constants::LIFE_EXPECTANCY_YEARS;
use sociocost_core::errors::CalcError;
use sociocost_core::params::{ParameterId, ParameterSet};
use sociocost_core::types::{CommunityImpact, CostFormulas, CostResult};
use sociocost_core::ModelConfig;

/// Run the full cost calculation over a parameter set.
///
/// The inputs are assumed to have passed hard validation; this function still
/// rejects non-finite inputs and non-finite or negative components rather
/// than letting `NaN` escape. Callers convert a [`CalcError`] into
/// [`CostResult::error_result`] instead of propagating it to the UI layer.
pub fn calculate_all(params: &ParameterSet, config: &ModelConfig) -> Result<CostResult, CalcError> {
    for (id, value) in params.iter() {
        if !value.is_finite() {
            return Err(CalcError::InvalidInput {
                parameter: id,
                value,
            });
        }
    }

    let vsl = params.get(ParameterId::Vsl);
    let suicides = params.get(ParameterId::Suicides);
    let attribution = params.get(ParameterId::Attribution);
    let depression = params.get(ParameterId::Depression);
    let yld = params.get(ParameterId::Yld);
    let qol = params.get(ParameterId::Qol);
    let healthcare = params.get(ParameterId::Healthcare);
    let productivity = params.get(ParameterId::Productivity);
    let duration = params.get(ParameterId::Duration);

    let vsl_dollars = vsl * 1_000_000.0;
    let annual_qaly = vsl_dollars / LIFE_EXPECTANCY_YEARS;

    let mortality = suicides * (attribution / 100.0) * vsl_dollars;
    let mental_health = depression * yld * (qol / 100.0) * annual_qaly;
    let healthcare_productivity = depression * (healthcare + productivity) * duration;

    check_component("mortality", mortality)?;
    check_component("mental_health", mental_health)?;
    check_component("healthcare_productivity", healthcare_productivity)?;

    let total = mortality + mental_health + healthcare_productivity;
    if !total.is_finite() {
        return Err(CalcError::NumericOverflow { component: "total" });
    }
    let gdp_percentage = (total / config.gdp) * 100.0;

    let formulas = CostFormulas {
        mortality: format!(
            "{suicides} deaths × {attribution}% attribution × ${vsl}M VSL = ${mortality:.0}"
        ),
        mental_health: format!(
            "{depression} affected × {yld} YLD × {qol}% QoL loss × ${annual_qaly:.0}/QALY = ${mental_health:.0}"
        ),
        healthcare_productivity: format!(
            "{depression} affected × (${healthcare} care + ${productivity} lost work) × {duration} years = ${healthcare_productivity:.0}"
        ),
    };

    Ok(CostResult {
        mortality,
        mental_health,
        healthcare_productivity,
        total,
        gdp_percentage,
        formulas,
        error: false,
    })
}

/// Scale a national result linearly to a community's population.
pub fn community_impact(
    national: &CostResult,
    population: f64,
    region: &str,
    config: &ModelConfig,
) -> CommunityImpact {
    let share = (population / config.national_population).max(0.0);
    CommunityImpact {
        region: region.to_string(),
        population,
        population_share: share,
        mortality: national.mortality * share,
        mental_health: national.mental_health * share,
        healthcare_productivity: national.healthcare_productivity * share,
        total: national.total * share,
    }
}

fn check_component(component: &'static str, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NumericOverflow { component });
    }
    if value < 0.0 {
        return Err(CalcError::NegativeComponent { component, value });
    }
    Ok(())
}
