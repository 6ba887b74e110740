//! Validation record types.

use serde::Serialize;

use sociocost_core::params::ParameterId;

/// Hard research bounds for one parameter, with supporting citation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HardBounds {
    pub min: f64,
    pub max: f64,
    pub citation: &'static str,
}

/// One recorded out-of-bounds parameter, as reported by
/// [`hard_violations`](super::hard_violations).
#[derive(Debug, Clone, Serialize)]
pub struct RangeViolation {
    pub parameter: ParameterId,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub citation: &'static str,
}

/// Advisory cross-parameter plausibility finding. Never blocks calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlausibilityWarning {
    /// `depression / (attribution/100)` implies a total affected population
    /// beyond the national-population order of magnitude.
    ImpliedPopulationTooLarge { implied: f64, national: f64 },
    /// Annual healthcare cost is outsized relative to the derived annual QALY
    /// value.
    HealthcareDwarfsQalyValue { healthcare: f64, annual_qaly: f64 },
    /// High quality-of-life loss combined with long disability duration may
    /// double-count severity.
    PessimisticChronicity { qol: f64, yld: f64 },
}

impl std::fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImpliedPopulationTooLarge { implied, national } => write!(
                f,
                "implied affected population {implied:.0} exceeds the national population {national:.0}"
            ),
            Self::HealthcareDwarfsQalyValue {
                healthcare,
                annual_qaly,
            } => write!(
                f,
                "healthcare cost ${healthcare:.0}/year is outsized against the annual QALY value ${annual_qaly:.0}"
            ),
            Self::PessimisticChronicity { qol, yld } => write!(
                f,
                "qol loss {qol}% combined with {yld} disability years may be double-counting severity"
            ),
        }
    }
}
