//! Density-curve shapes and confidence intervals.
//!
//! The "distribution" here is a deterministic parameterized shape function
//! tuned for display, not a sampled empirical distribution. Two shapes exist:
//! symmetric (normal-like) and right-skewed (wide falloff below the current
//! value, steep above it, modelling uncertainty around a consensus point).

use serde::Serialize;

use sociocost_core::constants::{
    NORMAL_FALLOFF, PEAK_COMPRESSION_EXPONENT, POSITION_CLAMP_MAX, POSITION_CLAMP_MIN,
    SKEW_ABOVE_FALLOFF, SKEW_BELOW_FALLOFF,
};
use sociocost_core::params::DistributionKind;

/// One sampled curve point. `x` is in parameter units across the expanded
/// display range; `y` is normalized to peak 1.0 and compressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Deterministic plausible-range band for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// A computed density curve plus its confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionCurve {
    pub points: Vec<CurvePoint>,
    pub confidence_interval: ConfidenceInterval,
}

/// Raw (pre-normalization) density at one sample position.
///
/// `offset` is the distance from the current-value position in spread units.
/// Skewed shapes fall off gently below the current value and steeply above it.
fn raw_density(kind: DistributionKind, offset: f64) -> f64 {
    let d = match kind {
        DistributionKind::Normal => (-NORMAL_FALLOFF * offset * offset).exp(),
        DistributionKind::Skewed => {
            if offset < 0.0 {
                (-SKEW_BELOW_FALLOFF * offset * offset).exp()
            } else {
                (-SKEW_ABOVE_FALLOFF * offset * offset).exp()
            }
        }
    };
    // Non-finite or negative intermediates clamp to 0 rather than poisoning
    // the normalization pass.
    if d.is_finite() && d > 0.0 {
        d
    } else {
        0.0
    }
}

/// Sample the density curve over the expanded display range.
///
/// `samples` evenly spaced positions across [0, 1]; the current value's
/// position is clamped to [0.01, 0.99] so the peak never sits on the edge.
pub(super) fn sample_curve(
    kind: DistributionKind,
    display_min: f64,
    display_max: f64,
    value: f64,
    spread_factor: f64,
    samples: usize,
) -> Vec<CurvePoint> {
    let range = display_max - display_min;
    if !(range > 0.0) || samples < 2 {
        return Vec::new();
    }

    let current_position =
        ((value - display_min) / range).clamp(POSITION_CLAMP_MIN, POSITION_CLAMP_MAX);

    let mut densities = Vec::with_capacity(samples);
    let mut max_density = 0.0_f64;
    for i in 0..samples {
        let t = i as f64 / (samples - 1) as f64;
        let offset = (t - current_position) / spread_factor;
        let d = raw_density(kind, offset);
        max_density = max_density.max(d);
        densities.push((t, d));
    }

    if max_density <= 0.0 {
        // Degenerate spread; emit a flat zero curve rather than dividing by 0.
        return densities
            .into_iter()
            .map(|(t, _)| CurvePoint {
                x: display_min + t * range,
                y: 0.0,
            })
            .collect();
    }

    densities
        .into_iter()
        .map(|(t, d)| {
            let normalized = (d / max_density).powf(PEAK_COMPRESSION_EXPONENT);
            CurvePoint {
                x: display_min + t * range,
                y: if normalized.is_finite() { normalized } else { 0.0 },
            }
        })
        .collect()
}
