//! Shared constants for the sociocost model.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Life expectancy used to annualize the value of a statistical life (years).
pub const LIFE_EXPECTANCY_YEARS: f64 = 75.0;

/// Default US GDP in dollars, for the GDP-percentage readout.
pub const DEFAULT_GDP: f64 = 24_000_000_000_000.0;

/// Default US national population, for community scaling and plausibility checks.
pub const DEFAULT_NATIONAL_POPULATION: f64 = 335_000_000.0;

/// Relative total-cost delta above which a `significant_change` event fires.
pub const DEFAULT_SIGNIFICANT_CHANGE_THRESHOLD: f64 = 0.10;

// ---- Distribution curve shape ----

/// Visual spread of the density curve as a fraction of the display range.
pub const SPREAD_FACTOR: f64 = 0.12;

/// Exponent applied after normalization to compress the curve peak.
pub const PEAK_COMPRESSION_EXPONENT: f64 = 0.6;

/// Falloff coefficient for the normal density shape.
pub const NORMAL_FALLOFF: f64 = 0.5;

/// Falloff coefficient below the current value for the skewed shape.
pub const SKEW_BELOW_FALLOFF: f64 = 0.3;

/// Falloff coefficient at or above the current value for the skewed shape.
pub const SKEW_ABOVE_FALLOFF: f64 = 1.2;

/// Current-position clamp keeping the curve peak off the display edges.
pub const POSITION_CLAMP_MIN: f64 = 0.01;
pub const POSITION_CLAMP_MAX: f64 = 0.99;

/// Minimum and maximum sample counts for a rendered curve.
pub const MIN_CURVE_SAMPLES: usize = 32;
pub const MAX_CURVE_SAMPLES: usize = 256;

/// Display pixels per curve sample when deriving the sample count from width.
pub const PIXELS_PER_SAMPLE: u32 = 4;

// ---- Confidence intervals ----

/// Two-sided 95% z-score for normal-distribution intervals.
pub const Z_95: f64 = 1.96;

/// Lower multiplier for skewed-distribution intervals.
pub const SKEW_LOWER_Z: f64 = 1.5;

/// Upper multiplier for skewed-distribution intervals.
pub const SKEW_UPPER_Z: f64 = 2.5;

/// Relative distance from the published default below which the literature
/// research range is reported verbatim instead of a computed interval.
pub const DEFAULT_PROXIMITY: f64 = 0.05;

// ---- Caching ----

/// Bounded curve-cache capacity (entries). Purely a performance knob;
/// eviction must always be safe.
pub const DEFAULT_CURVE_CACHE_CAPACITY: usize = 50;
