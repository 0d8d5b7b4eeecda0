//! Ranked improvement priorities.

use std::cmp::Ordering;

use crate::calculator::status_for;
use crate::catalog::MeasureCatalog;
use crate::observed::ObservedScoreSet;

use super::types::PriorityItem;

/// Measures in `current` that sit at fair, poor, or critical, ranked by
/// weighted distance to the "good" cut point and truncated to `limit`.
///
/// Ties keep catalog order. An empty result means every measure is on track.
pub fn rank_priorities<'a>(
    catalog: &'a MeasureCatalog,
    current: &ObservedScoreSet,
    limit: usize,
) -> Vec<PriorityItem<'a>> {
    let mut items: Vec<PriorityItem<'a>> = catalog
        .all_measures()
        .iter()
        .filter_map(|measure| {
            let observed = current.get(measure.id()).filter(|v| v.is_finite())?;
            let spec = &measure.spec;
            let status = status_for(spec, observed);
            if !status.is_priority() {
                return None;
            }
            let improvement_gap = spec.shortfall(observed, spec.thresholds.good);
            Some(PriorityItem {
                measure,
                observed,
                status,
                improvement_gap,
                impact_potential: improvement_gap * spec.weight,
            })
        })
        .collect();

    // Stable sort: equal impact keeps catalog order.
    items.sort_by(|a, b| {
        b.impact_potential
            .partial_cmp(&a.impact_potential)
            .unwrap_or(Ordering::Equal)
    });
    items.truncate(limit);

    tracing::debug!(priority_count = items.len(), limit, "improvement priorities ranked");
    items
}
