//! Shared result types produced by the engine and carried on events.

mod cost;

pub use cost::{CommunityImpact, CostFormulas, CostResult};
