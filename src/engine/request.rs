//! Recommendation request model
//!
//! The caller describes what the machine is for (`usage` plus a free-text
//! `detail` qualifier) and how much it may cost (a named budget tier).
//! Parsing is deliberately lenient: unrecognized usage strings behave as
//! generic use and unrecognized tiers resolve to the intermediate ceiling,
//! so malformed input degrades to a sensible default instead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the machine will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Gaming,
    Studies,
    Work,
    Other,
}

impl Usage {
    /// Lenient parse; anything unrecognized is generic use.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "gaming" | "games" | "game" => Usage::Gaming,
            "studies" | "study" | "student" => Usage::Studies,
            "work" => Usage::Work,
            _ => Usage::Other,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Usage::Gaming => "gaming",
            Usage::Studies => "studies",
            Usage::Work => "work",
            Usage::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Named spend ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Economic,
    Intermediate,
    High,
    Extreme,
}

impl BudgetTier {
    /// Lenient parse; unknown labels resolve to the intermediate tier.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "economic" | "economy" | "budget" => BudgetTier::Economic,
            "intermediate" | "mid" | "medium" => BudgetTier::Intermediate,
            "high" => BudgetTier::High,
            "extreme" => BudgetTier::Extreme,
            _ => BudgetTier::Intermediate,
        }
    }

    /// Fixed monetary ceiling for the tier.
    pub fn ceiling(&self) -> f64 {
        match self {
            BudgetTier::Economic => 4000.0,
            BudgetTier::Intermediate => 7000.0,
            BudgetTier::High => 12000.0,
            BudgetTier::Extreme => 25000.0,
        }
    }

    /// Largest RAM capacity (GB) a platform kit may carry at this tier.
    /// `None` means unrestricted.
    pub fn ram_capacity_cap(&self) -> Option<u32> {
        match self {
            BudgetTier::Economic => Some(16),
            BudgetTier::Intermediate => Some(32),
            BudgetTier::High => Some(64),
            BudgetTier::Extreme => None,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetTier::Economic => "economic",
            BudgetTier::Intermediate => "intermediate",
            BudgetTier::High => "high",
            BudgetTier::Extreme => "extreme",
        };
        write!(f, "{}", label)
    }
}

/// One recommendation request: usage profile, free-text detail qualifier,
/// and budget tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    pub usage: Usage,
    pub detail: String,
    pub tier: BudgetTier,
}

impl BuildRequest {
    /// Builds a request from raw caller strings, parsing usage and tier
    /// leniently and keeping the detail verbatim for substring matching.
    pub fn from_raw(usage: &str, detail: &str, budget: &str) -> Self {
        Self {
            usage: Usage::parse(usage),
            detail: detail.to_string(),
            tier: BudgetTier::parse(budget),
        }
    }

    fn detail_has(&self, needle: &str) -> bool {
        self.detail.to_lowercase().contains(needle)
    }

    /// Light workloads ("light games", office-style use).
    pub fn light_detail(&self) -> bool {
        self.detail_has("light")
    }

    /// Heavy or unrestricted gaming ("heavy", "all types").
    pub fn heavy_detail(&self) -> bool {
        self.detail_has("heavy") || self.detail_has("all types")
    }

    /// Engineering/architecture coursework.
    pub fn engineering_detail(&self) -> bool {
        self.detail_has("engineering") || self.detail_has("architecture")
    }

    /// Editing/design/rendering workloads.
    pub fn creative_detail(&self) -> bool {
        self.detail_has("editing") || self.detail_has("design") || self.detail_has("rendering")
    }

    /// Whether this request needs a discrete GPU at all. Non-gaming builds
    /// only get one for workloads that demand it; generic use never does.
    pub fn requires_gpu(&self) -> bool {
        match self.usage {
            Usage::Gaming => !self.light_detail(),
            Usage::Work => self.detail_has("editing") || self.detail_has("design"),
            Usage::Studies => self.detail_has("engineering"),
            Usage::Other => false,
        }
    }
}
