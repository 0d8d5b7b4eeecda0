//! Rating and simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRIORITY_LIMIT, DEFAULT_TARGET_TIER};

/// Tier names a target scenario may aim for. `critical` is not a target.
pub const TARGET_TIERS: &[&str] = &["excellent", "good", "fair", "poor"];

/// Configuration for the rating calculator and simulation comparator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RatingConfig {
    /// Maximum number of improvement priorities returned. Default: 5.
    pub priority_limit: Option<usize>,
    /// Tier used when building a target what-if scenario. Default: "good".
    pub target_tier: Option<String>,
}

impl RatingConfig {
    /// Returns the effective priority limit, defaulting to 5.
    pub fn effective_priority_limit(&self) -> usize {
        self.priority_limit.unwrap_or(DEFAULT_PRIORITY_LIMIT)
    }

    /// Returns the effective target tier, defaulting to "good".
    pub fn effective_target_tier(&self) -> &str {
        self.target_tier.as_deref().unwrap_or(DEFAULT_TARGET_TIER)
    }
}
