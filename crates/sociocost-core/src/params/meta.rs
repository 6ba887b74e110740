//! Static research metadata per parameter.
//!
//! Two distinct ranges exist per parameter and must not be conflated:
//! the *display* range (expanded so density curves never clip at the edges)
//! and the *research* range (the literature-cited band reported verbatim when
//! the current value sits at the published consensus point). Hard validation
//! bounds are a third table and live in the validation engine.

use serde::{Deserialize, Serialize};

use super::ParameterId;

/// Shape family used for a parameter's uncertainty curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Symmetric falloff around the current value.
    Normal,
    /// Right-skewed: wide below the current value, steep above it.
    Skewed,
}

/// Literature-cited plausible range for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResearchRange {
    pub min: f64,
    pub max: f64,
}

/// Static metadata for one parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterMeta {
    /// Research-consensus default value.
    pub default_value: f64,
    /// Expanded display/slider minimum (wider than the hard bounds).
    pub display_min: f64,
    /// Expanded display/slider maximum (wider than the hard bounds).
    pub display_max: f64,
    /// Slider step granularity.
    pub step: f64,
    /// Human-readable unit label.
    pub unit: &'static str,
    /// Uncertainty curve shape.
    pub distribution: DistributionKind,
    /// Relative standard deviation as a fraction of the current value.
    pub uncertainty_factor: f64,
    /// Literature-cited range, reported verbatim at the consensus point.
    pub research_range: ResearchRange,
    /// Supporting citation text, surfaced with range-violation errors.
    pub citation: &'static str,
}

macro_rules! range {
    ($min:expr, $max:expr) => {
        ResearchRange { min: $min, max: $max }
    };
}

static VSL: ParameterMeta = ParameterMeta {
    default_value: 13.7,
    display_min: 5.0,
    display_max: 16.0,
    step: 0.1,
    unit: "$M per life",
    distribution: DistributionKind::Normal,
    uncertainty_factor: 0.15,
    research_range: range!(10.0, 14.0),
    citation: "US DOT/EPA value-of-statistical-life guidance, 2023 update: $7.2M-$14.0M",
};

static SUICIDES: ParameterMeta = ParameterMeta {
    default_value: 110_000.0,
    display_min: 50_000.0,
    display_max: 350_000.0,
    step: 1_000.0,
    unit: "deaths/year",
    distribution: DistributionKind::Skewed,
    uncertainty_factor: 0.20,
    research_range: range!(95_000.0, 150_000.0),
    citation: "CDC WONDER excess youth suicide estimates, 1999-2023: 89,000-300,000",
};

static ATTRIBUTION: ParameterMeta = ParameterMeta {
    default_value: 18.0,
    display_min: 0.0,
    display_max: 40.0,
    step: 0.5,
    unit: "%",
    distribution: DistributionKind::Skewed,
    uncertainty_factor: 0.30,
    research_range: range!(10.0, 25.0),
    citation: "Braghieri et al. 2022; Twenge & Campbell meta-analyses: 5%-30% attribution",
};

static DEPRESSION: ParameterMeta = ParameterMeta {
    default_value: 5_000_000.0,
    display_min: 1_000_000.0,
    display_max: 20_000_000.0,
    step: 100_000.0,
    unit: "people",
    distribution: DistributionKind::Skewed,
    uncertainty_factor: 0.25,
    research_range: range!(4_000_000.0, 8_000_000.0),
    citation: "NSDUH/SAMHSA attributable-prevalence estimates: 3M-15M affected",
};

static YLD: ParameterMeta = ParameterMeta {
    default_value: 6.0,
    display_min: 3.0,
    display_max: 10.0,
    step: 0.1,
    unit: "years",
    distribution: DistributionKind::Normal,
    uncertainty_factor: 0.15,
    research_range: range!(5.2, 7.0),
    citation: "GBD 2021 years-lived-with-disability for major depression: 4.8-8.2 years",
};

static QOL: ParameterMeta = ParameterMeta {
    default_value: 35.0,
    display_min: 20.0,
    display_max: 60.0,
    step: 1.0,
    unit: "% reduction",
    distribution: DistributionKind::Normal,
    uncertainty_factor: 0.20,
    research_range: range!(31.0, 40.0),
    citation: "EQ-5D utility decrements for depressive disorder: 31%-47%",
};

static HEALTHCARE: ParameterMeta = ParameterMeta {
    default_value: 7_000.0,
    display_min: 3_000.0,
    display_max: 25_000.0,
    step: 100.0,
    unit: "$/year",
    distribution: DistributionKind::Skewed,
    uncertainty_factor: 0.25,
    research_range: range!(6_500.0, 9_000.0),
    citation: "Greenberg et al. 2021 per-patient direct treatment cost: $6,500-$20,000",
};

static PRODUCTIVITY: ParameterMeta = ParameterMeta {
    default_value: 6_000.0,
    display_min: 2_000.0,
    display_max: 15_000.0,
    step: 100.0,
    unit: "$/year",
    distribution: DistributionKind::Normal,
    uncertainty_factor: 0.20,
    research_range: range!(5_200.0, 7_500.0),
    citation: "Absenteeism and presenteeism loss estimates: $4,800-$10,000 per year",
};

static DURATION: ParameterMeta = ParameterMeta {
    default_value: 4.5,
    display_min: 1.0,
    display_max: 10.0,
    step: 0.1,
    unit: "years",
    distribution: DistributionKind::Skewed,
    uncertainty_factor: 0.20,
    research_range: range!(3.5, 6.0),
    citation: "Median episode-duration studies, treated and untreated: 3.0-8.5 years",
};

pub(super) fn meta(id: ParameterId) -> &'static ParameterMeta {
    match id {
        ParameterId::Vsl => &VSL,
        ParameterId::Suicides => &SUICIDES,
        ParameterId::Attribution => &ATTRIBUTION,
        ParameterId::Depression => &DEPRESSION,
        ParameterId::Yld => &YLD,
        ParameterId::Qol => &QOL,
        ParameterId::Healthcare => &HEALTHCARE,
        ParameterId::Productivity => &PRODUCTIVITY,
        ParameterId::Duration => &DURATION,
    }
}
