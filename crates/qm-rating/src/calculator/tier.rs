//! Threshold ladder classification.
//!
//! Points and status are two classifications over the same four cut
//! points. A value equal to a cut point meets it.

use std::fmt;
use std::str::FromStr;

use qm_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::catalog::MeasureSpec;

/// Qualitative tier, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl StatusTier {
    /// Best to worst.
    pub const ALL: &'static [StatusTier] = &[
        Self::Excellent,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }

    /// Fair, poor, and critical measures are improvement priorities.
    pub fn is_priority(&self) -> bool {
        *self <= Self::Fair
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "status_tier".to_string(),
                message: format!("unknown tier {s:?}"),
            })
    }
}

/// Index of the first cut point met, best first; 4 when none is met.
fn ladder_position(spec: &MeasureSpec, value: f64) -> usize {
    spec.thresholds
        .ladder()
        .iter()
        .position(|&cut| spec.meets(value, cut))
        .unwrap_or(4)
}

/// Points on the 1-5 ladder.
pub fn points_for(spec: &MeasureSpec, value: f64) -> u8 {
    match ladder_position(spec, value) {
        0 => 5,
        1 => 4,
        2 => 3,
        3 => 2,
        _ => 1,
    }
}

/// Qualitative tier for a value.
pub fn status_for(spec: &MeasureSpec, value: f64) -> StatusTier {
    match ladder_position(spec, value) {
        0 => StatusTier::Excellent,
        1 => StatusTier::Good,
        2 => StatusTier::Fair,
        3 => StatusTier::Poor,
        _ => StatusTier::Critical,
    }
}

/// Cut point a value must meet to reach `tier`. `Critical` has none.
pub fn threshold_for(spec: &MeasureSpec, tier: StatusTier) -> Option<f64> {
    let t = &spec.thresholds;
    match tier {
        StatusTier::Excellent => Some(t.excellent),
        StatusTier::Good => Some(t.good),
        StatusTier::Fair => Some(t.fair),
        StatusTier::Poor => Some(t.poor),
        StatusTier::Critical => None,
    }
}
