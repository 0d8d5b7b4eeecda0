//! Side-by-side rating of a current and a what-if score set.

use crate::calculator::aggregate::round_one_decimal;
use crate::calculator::{breakdown, points_for};
use crate::catalog::{Measure, MeasureCatalog};
use crate::observed::ObservedScoreSet;

use super::types::{Comparison, MeasureChange};

/// Rate both sets independently and report the difference.
pub fn compare(
    catalog: &MeasureCatalog,
    current: &ObservedScoreSet,
    what_if: &ObservedScoreSet,
) -> Comparison {
    let current_rating = breakdown(catalog, current).rating;
    let what_if_rating = breakdown(catalog, what_if).rating;
    // Both ratings carry one decimal; rounding strips float noise from the subtraction.
    let delta = round_one_decimal(what_if_rating - current_rating);

    let scored = |set: &ObservedScoreSet, measure: &Measure| {
        set.get(measure.id())
            .filter(|v| v.is_finite())
            .map(|v| points_for(&measure.spec, v))
    };

    let changes = catalog
        .all_measures()
        .iter()
        .filter_map(|m| {
            let before = scored(current, m);
            let after = scored(what_if, m);
            (before != after).then(|| MeasureChange {
                measure_id: m.id().to_string(),
                current_points: before,
                what_if_points: after,
            })
        })
        .collect();

    tracing::debug!(
        current_rating,
        what_if_rating,
        rating_delta = delta,
        "what-if comparison computed"
    );

    Comparison {
        current_rating,
        what_if_rating,
        delta,
        changes,
    }
}
