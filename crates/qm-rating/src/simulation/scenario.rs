//! What-if scenario construction.

use crate::calculator::{status_for, threshold_for, StatusTier};
use crate::catalog::MeasureCatalog;
use crate::observed::ObservedScoreSet;

/// Copy of `current` with every measure below `tier` moved exactly onto
/// that tier's cut point. Measures already at or above `tier`, unknown ids,
/// and non-finite values are carried over unchanged.
pub fn target_scenario(
    catalog: &MeasureCatalog,
    current: &ObservedScoreSet,
    tier: StatusTier,
) -> ObservedScoreSet {
    let mut what_if = current.clone();
    for measure in catalog.all_measures() {
        let Some(value) = current.get(measure.id()).filter(|v| v.is_finite()) else {
            continue;
        };
        let Some(cut) = threshold_for(&measure.spec, tier) else {
            continue;
        };
        if status_for(&measure.spec, value) < tier {
            what_if.insert(measure.id(), cut);
        }
    }
    what_if
}
