//! The nine model parameters: identifiers, static research metadata, and the
//! current-value set.

mod meta;
mod set;

pub use meta::{DistributionKind, ParameterMeta, ResearchRange};
pub use set::ParameterSet;

use serde::{Deserialize, Serialize};

/// The nine adjustable research parameters of the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterId {
    /// Value of a statistical life, in millions of dollars.
    Vsl,
    /// Excess suicides per year attributed to the exposure window.
    Suicides,
    /// Percentage of those deaths causally attributed to social media.
    Attribution,
    /// People with social-media-attributable depression.
    Depression,
    /// Years lived with disability per affected person.
    Yld,
    /// Quality-of-life reduction during a depressive episode, in percent.
    Qol,
    /// Annual healthcare cost per affected person, in dollars.
    Healthcare,
    /// Annual productivity loss per affected person, in dollars.
    Productivity,
    /// Average condition duration, in years.
    Duration,
}

impl ParameterId {
    /// All nine parameters, in canonical order.
    pub const ALL: &'static [ParameterId] = &[
        Self::Vsl,
        Self::Suicides,
        Self::Attribution,
        Self::Depression,
        Self::Yld,
        Self::Qol,
        Self::Healthcare,
        Self::Productivity,
        Self::Duration,
    ];

    /// Number of parameters.
    pub const COUNT: usize = 9;

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vsl => "vsl",
            Self::Suicides => "suicides",
            Self::Attribution => "attribution",
            Self::Depression => "depression",
            Self::Yld => "yld",
            Self::Qol => "qol",
            Self::Healthcare => "healthcare",
            Self::Productivity => "productivity",
            Self::Duration => "duration",
        }
    }

    /// Parse a parameter name as produced by [`ParameterId::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Stable index into [`ParameterSet`] storage.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Static research metadata for this parameter.
    pub fn meta(&self) -> &'static ParameterMeta {
        meta::meta(*self)
    }
}

impl std::fmt::Display for ParameterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
