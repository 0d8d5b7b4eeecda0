//! Property tests for the rating calculator and simulation comparator.

use proptest::prelude::*;
use qm_rating::*;

fn catalog() -> MeasureCatalog {
    MeasureCatalog::builtin().unwrap()
}

/// Observed sets over a random subset of built-in measures, values 0-100.
fn arb_observed() -> impl Strategy<Value = ObservedScoreSet> {
    let ids: Vec<String> = catalog()
        .all_measures()
        .iter()
        .map(|m| m.id().to_string())
        .collect();
    let n = ids.len();
    prop::collection::vec(prop::option::of(0.0f64..=100.0), n).prop_map(move |values| {
        ids.iter()
            .zip(values)
            .filter_map(|(id, v)| v.map(|v| (id.clone(), v)))
            .collect()
    })
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn aggregate_and_priorities_are_deterministic(observed in arb_observed()) {
        let catalog = catalog();
        prop_assert_eq!(aggregate(&catalog, &observed), aggregate(&catalog, &observed));

        let first: Vec<(String, f64)> = rank_priorities(&catalog, &observed, 5)
            .iter()
            .map(|i| (i.measure.id().to_string(), i.impact_potential))
            .collect();
        let second: Vec<(String, f64)> = rank_priorities(&catalog, &observed.clone(), 5)
            .iter()
            .map(|i| (i.measure.id().to_string(), i.impact_potential))
            .collect();
        prop_assert_eq!(first, second);
    }
}

// ── Range ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rating_bounded_one_to_five(observed in arb_observed()) {
        let rating = aggregate(&catalog(), &observed);
        prop_assert!((1.0..=5.0).contains(&rating), "Out of bounds: {}", rating);
    }
}

proptest! {
    #[test]
    fn rating_has_one_decimal(observed in arb_observed()) {
        let rating = aggregate(&catalog(), &observed);
        prop_assert!(((rating * 10.0).round() - rating * 10.0).abs() < 1e-9);
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn improving_one_measure_never_lowers_rating(
        observed in arb_observed(),
        pick in any::<prop::sample::Index>(),
        step in 0.001f64..50.0,
    ) {
        let catalog = catalog();
        let measure = pick.get(catalog.all_measures());
        let base = observed.get(measure.id()).unwrap_or(50.0);
        let before_set = observed.clone().with(measure.id(), base);

        let improved = if measure.spec.lower_is_better { base - step } else { base + step };
        let after_set = observed.with(measure.id(), improved);

        let before = aggregate(&catalog, &before_set);
        let after = aggregate(&catalog, &after_set);
        prop_assert!(after >= before, "{}: {} -> {} lowered rating {} -> {}",
            measure.id(), base, improved, before, after);
    }
}

proptest! {
    #[test]
    fn points_and_status_agree(
        pick in any::<prop::sample::Index>(),
        value in -10.0f64..110.0,
    ) {
        let catalog = catalog();
        let spec = &pick.get(catalog.all_measures()).spec;
        let points = points_for(spec, value);
        let expected = match status_for(spec, value) {
            StatusTier::Excellent => 5,
            StatusTier::Good => 4,
            StatusTier::Fair => 3,
            StatusTier::Poor => 2,
            StatusTier::Critical => 1,
        };
        prop_assert_eq!(points, expected);
    }
}

// ── Priorities ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn priorities_never_include_good_or_excellent(
        observed in arb_observed(),
        limit in 0usize..20,
    ) {
        let catalog = catalog();
        let items = rank_priorities(&catalog, &observed, limit);
        prop_assert!(items.len() <= limit);
        for item in &items {
            let status = status_for(&item.measure.spec, item.observed);
            prop_assert!(status != StatusTier::Excellent && status != StatusTier::Good);
            prop_assert!(item.improvement_gap >= 0.0);
        }
        for pair in items.windows(2) {
            prop_assert!(pair[0].impact_potential >= pair[1].impact_potential);
        }
    }
}

// ── Comparison ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn comparing_a_set_with_itself_is_zero(observed in arb_observed()) {
        let cmp = compare(&catalog(), &observed, &observed);
        prop_assert_eq!(cmp.delta, 0.0);
        prop_assert!(cmp.changes.is_empty());
    }
}

proptest! {
    #[test]
    fn target_scenario_never_lowers_rating(observed in arb_observed()) {
        let catalog = catalog();
        for tier in StatusTier::ALL {
            let what_if = target_scenario(&catalog, &observed, *tier);
            let cmp = compare(&catalog, &observed, &what_if);
            prop_assert!(cmp.delta >= 0.0, "{} lowered rating by {}", tier, cmp.delta);
        }
    }
}
