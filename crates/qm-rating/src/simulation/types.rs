//! Simulation result types.

use serde::Serialize;

use crate::calculator::StatusTier;
use crate::catalog::Measure;

/// Current rating against a hypothetical one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub current_rating: f64,
    pub what_if_rating: f64,
    /// `what_if_rating - current_rating`. Positive means the what-if scenario improves the rating.
    pub delta: f64,
    /// Measures whose points differ between the two sets, in catalog order.
    pub changes: Vec<MeasureChange>,
}

impl Comparison {
    pub fn improves(&self) -> bool {
        self.delta > 0.0
    }
}

/// Per-measure point movement. `None` means the measure was not scored on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureChange {
    pub measure_id: String,
    pub current_points: Option<u8>,
    pub what_if_points: Option<u8>,
}

/// An improvement opportunity, ranked by `impact_potential`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityItem<'a> {
    pub measure: &'a Measure,
    pub observed: f64,
    pub status: StatusTier,
    /// Distance past the "good" cut point on the wrong side.
    pub improvement_gap: f64,
    /// `improvement_gap × weight`.
    pub impact_potential: f64,
}

impl PriorityItem<'_> {
    /// The measure's improvement steps.
    pub fn action_plan(&self) -> &[String] {
        &self.measure.info.action_plan
    }
}
