//! Catalog types: scoring schema, presentation payload, and their join.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two disjoint CMS measure groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureGroup {
    LongStay,
    ShortStay,
}

impl MeasureGroup {
    pub const ALL: &'static [MeasureGroup] = &[Self::LongStay, Self::ShortStay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LongStay => "long-stay",
            Self::ShortStay => "short-stay",
        }
    }
}

impl fmt::Display for MeasureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four cut points mapping a raw percentage onto the 1-5 ladder.
///
/// Strictly increasing when lower is better, strictly decreasing otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl Thresholds {
    pub fn new(excellent: f64, good: f64, fair: f64, poor: f64) -> Self {
        Self {
            excellent,
            good,
            fair,
            poor,
        }
    }

    /// Cut points from best to worst.
    pub fn ladder(&self) -> [f64; 4] {
        [self.excellent, self.good, self.fair, self.poor]
    }
}

/// Everything the calculator needs to score a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub id: String,
    pub group: MeasureGroup,
    pub lower_is_better: bool,
    pub thresholds: Thresholds,
    pub weight: f64,
}

impl MeasureSpec {
    /// Whether `value` meets `cut`. Equality counts as meeting it.
    pub fn meets(&self, value: f64, cut: f64) -> bool {
        if self.lower_is_better {
            value <= cut
        } else {
            value >= cut
        }
    }

    /// Distance from `value` to `cut` on the wrong side, zero if met.
    pub fn shortfall(&self, value: f64, cut: f64) -> f64 {
        let gap = if self.lower_is_better {
            value - cut
        } else {
            cut - value
        };
        gap.max(0.0)
    }
}

/// Display payload. Opaque to scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureInfo {
    pub name: String,
    pub description: String,
    /// National average, for reference only.
    pub national_average: f64,
    /// Ordered improvement steps.
    pub action_plan: Vec<String>,
}

impl MeasureInfo {
    /// Minimal payload carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A catalog entry: scoring schema joined with its display payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub spec: MeasureSpec,
    pub info: MeasureInfo,
}

impl Measure {
    pub fn new(spec: MeasureSpec, info: MeasureInfo) -> Self {
        Self { spec, info }
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }
}
