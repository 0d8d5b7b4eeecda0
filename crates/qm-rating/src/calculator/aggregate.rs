//! Weighted composite star rating.
//!
//! ```text
//! rating = round1( Σ points(m) × weight(m) / Σ weight(m) )
//! ```
//!
//! Both sums run over measures present in the observed set only. With no
//! scorable measure the rating is 3.0. The result is clamped to [1.0, 5.0].

use qm_core::constants::{DEFAULT_RATING, MAX_RATING, MIN_RATING};
use serde::Serialize;

use super::tier::{points_for, status_for, StatusTier};
use crate::catalog::MeasureCatalog;
use crate::observed::ObservedScoreSet;

/// One scored measure's share of the composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureContribution {
    pub measure_id: String,
    pub observed: f64,
    pub points: u8,
    pub status: StatusTier,
    pub weight: f64,
    pub weighted_points: f64,
}

/// Composite rating with every input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    /// Scored measures in catalog order.
    pub contributions: Vec<MeasureContribution>,
    /// Observed ids that were not scored: unknown to the catalog or non-finite.
    pub skipped: Vec<String>,
    pub weighted_sum: f64,
    pub weight_sum: f64,
    pub rating: f64,
}

impl RatingBreakdown {
    /// True when the rating is the no-data default rather than a computed value.
    pub fn is_default(&self) -> bool {
        self.contributions.is_empty()
    }
}

/// Composite star rating for an observed set.
pub fn aggregate(catalog: &MeasureCatalog, observed: &ObservedScoreSet) -> f64 {
    breakdown(catalog, observed).rating
}

/// Composite star rating with per-measure contributions.
///
/// Unknown ids and non-finite values are skipped with a warning; neither
/// is an error.
pub fn breakdown(catalog: &MeasureCatalog, observed: &ObservedScoreSet) -> RatingBreakdown {
    let mut contributions = Vec::new();
    let mut skipped = Vec::new();

    // Catalog order keeps the float sums deterministic.
    for measure in catalog.all_measures() {
        let Some(value) = observed.get(measure.id()) else {
            continue;
        };
        if !value.is_finite() {
            tracing::warn!(measure_id = measure.id(), value, "non-finite observed value skipped");
            skipped.push(measure.id().to_string());
            continue;
        }
        let spec = &measure.spec;
        let points = points_for(spec, value);
        contributions.push(MeasureContribution {
            measure_id: spec.id.clone(),
            observed: value,
            points,
            status: status_for(spec, value),
            weight: spec.weight,
            weighted_points: f64::from(points) * spec.weight,
        });
    }

    for (id, _) in observed.iter() {
        if !catalog.contains(id) {
            tracing::warn!(measure_id = id, "observed value for unknown measure skipped");
            skipped.push(id.to_string());
        }
    }

    let weighted_sum: f64 = contributions.iter().map(|c| c.weighted_points).sum();
    let weight_sum: f64 = contributions.iter().map(|c| c.weight).sum();

    let rating = if weight_sum > 0.0 {
        round_one_decimal(weighted_sum / weight_sum).clamp(MIN_RATING, MAX_RATING)
    } else {
        DEFAULT_RATING
    };

    tracing::debug!(
        rating,
        scored = contributions.len(),
        skipped = skipped.len(),
        "composite rating computed"
    );

    RatingBreakdown {
        contributions,
        skipped,
        weighted_sum,
        weight_sum,
        rating,
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Measure, MeasureGroup, MeasureInfo, MeasureSpec, Thresholds};

    fn lower_measure(id: &str, t: [f64; 4], weight: f64) -> Measure {
        Measure::new(
            MeasureSpec {
                id: id.to_string(),
                group: MeasureGroup::LongStay,
                lower_is_better: true,
                thresholds: Thresholds::new(t[0], t[1], t[2], t[3]),
                weight,
            },
            MeasureInfo::named(id),
        )
    }

    fn two_measure_catalog() -> MeasureCatalog {
        MeasureCatalog::new(
            "test",
            vec![
                lower_measure("falls", [1.5, 2.5, 4.0, 5.5], 1.0),
                lower_measure("rehospitalization", [15.0, 18.0, 24.0, 30.0], 1.5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_single_measure_at_national_average() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new().with("falls", 3.2);
        assert_eq!(aggregate(&catalog, &observed), 3.0);
    }

    #[test]
    fn test_weighted_two_measures() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new()
            .with("falls", 3.2)
            .with("rehospitalization", 16.0);
        // (3 × 1.0 + 4 × 1.5) / 2.5
        assert_eq!(aggregate(&catalog, &observed), 3.6);
    }

    #[test]
    fn test_empty_observed_defaults_to_three() {
        let catalog = two_measure_catalog();
        let b = breakdown(&catalog, &ObservedScoreSet::new());
        assert_eq!(b.rating, 3.0);
        assert!(b.is_default());
    }

    #[test]
    fn test_unknown_ids_skipped() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new()
            .with("falls", 1.0)
            .with("retired_measure", 99.0);
        let b = breakdown(&catalog, &observed);
        assert_eq!(b.rating, 5.0);
        assert_eq!(b.skipped, vec!["retired_measure".to_string()]);
    }

    #[test]
    fn test_only_unknown_ids_defaults_to_three() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new().with("retired_measure", 1.0);
        assert_eq!(aggregate(&catalog, &observed), 3.0);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new()
            .with("falls", f64::NAN)
            .with("rehospitalization", 16.0);
        let b = breakdown(&catalog, &observed);
        assert_eq!(b.rating, 4.0);
        assert_eq!(b.skipped, vec!["falls".to_string()]);
    }

    #[test]
    fn test_breakdown_sums_match_rating() {
        let catalog = two_measure_catalog();
        let observed = ObservedScoreSet::new()
            .with("falls", 6.0)
            .with("rehospitalization", 14.0);
        let b = breakdown(&catalog, &observed);
        assert_eq!(b.contributions.len(), 2);
        assert_eq!(b.weighted_sum, 1.0 + 7.5);
        assert_eq!(b.weight_sum, 2.5);
        assert_eq!(b.rating, round_one_decimal(8.5 / 2.5));
        assert_eq!(b.contributions[0].status, StatusTier::Critical);
        assert_eq!(b.contributions[1].status, StatusTier::Excellent);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(3.44), 3.4);
        assert_eq!(round_one_decimal(3.45001), 3.5);
        assert_eq!(round_one_decimal(9.0 / 2.5), 3.6);
    }
}
