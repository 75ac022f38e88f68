//! Project phase domain model.
//!
//! Every project advances through the same six fixed phases. Declaration
//! order is load-bearing: it is the display order, the aggregation walk
//! order, and the scan order used to resolve the current phase.

use serde::{Deserialize, Serialize};

/// One of the six fixed top-level workflow phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Incoming lead being qualified.
    Lead,
    /// Inspection, estimating, and agreement signing.
    Prospect,
    /// Signed project being prepared for work.
    Approved,
    /// Crew on site, work underway.
    Execution,
    /// Supplemental insurance scope negotiated mid-job.
    SecondSupplement,
    /// Invoicing and closeout.
    Completion,
}

impl Phase {
    /// All phases in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Lead,
        Self::Prospect,
        Self::Approved,
        Self::Execution,
        Self::SecondSupplement,
        Self::Completion,
    ];

    /// Human-readable phase name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Prospect => "Prospect",
            Self::Approved => "Approved",
            Self::Execution => "Execution",
            Self::SecondSupplement => "2nd Supplement",
            Self::Completion => "Completion",
        }
    }

    /// Stable string key, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Prospect => "prospect",
            Self::Approved => "approved",
            Self::Execution => "execution",
            Self::SecondSupplement => "second_supplement",
            Self::Completion => "completion",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lead" => Some(Self::Lead),
            "prospect" => Some(Self::Prospect),
            "approved" => Some(Self::Approved),
            "execution" => Some(Self::Execution),
            "second_supplement" | "2nd_supplement" => Some(Self::SecondSupplement),
            "completion" => Some(Self::Completion),
            _ => None,
        }
    }

    /// Position in the canonical order (0-based).
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// The terminal phase of every project.
    pub const fn terminal() -> Self {
        Self::Completion
    }

    /// The phase a project starts in.
    pub const fn initial() -> Self {
        Self::Lead
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
