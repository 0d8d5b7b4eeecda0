//! Rating calculator scenarios over hand-built and built-in catalogs.

use qm_rating::*;

fn lower_is_better(id: &str, t: [f64; 4], weight: f64) -> Measure {
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

fn scenario_catalog() -> MeasureCatalog {
    MeasureCatalog::new(
        "scenario",
        vec![
            lower_is_better("falls", [1.5, 2.5, 4.0, 5.5], 1.0),
            lower_is_better("rehospitalization", [15.0, 18.0, 24.0, 30.0], 1.5),
        ],
    )
    .unwrap()
}

#[test]
fn falls_at_national_average_is_fair_and_three_stars() {
    let catalog = scenario_catalog();
    let falls = &catalog.by_id("falls").unwrap().spec;

    assert_eq!(points_for(falls, 3.2), 3);
    assert_eq!(status_for(falls, 3.2), StatusTier::Fair);
    assert_eq!(aggregate(&catalog, &ObservedScoreSet::new().with("falls", 3.2)), 3.0);
}

#[test]
fn falls_and_rehospitalization_weighted_to_three_point_six() {
    let catalog = scenario_catalog();
    let observed = ObservedScoreSet::new()
        .with("falls", 3.2)
        .with("rehospitalization", 16.0);
    assert_eq!(aggregate(&catalog, &observed), 3.6);
}

#[test]
fn empty_observed_set_is_three() {
    let catalog = MeasureCatalog::builtin().unwrap();
    assert_eq!(aggregate(&catalog, &ObservedScoreSet::new()), 3.0);
}

#[test]
fn boundary_counts_on_better_side() {
    let catalog = scenario_catalog();
    let falls = &catalog.by_id("falls").unwrap().spec;
    assert_eq!(points_for(falls, 1.5), 5);
    assert_eq!(points_for(falls, 1.5000001), 4);
}

#[test]
fn absent_measures_do_not_dilute_rating() {
    let catalog = MeasureCatalog::builtin().unwrap();
    let observed = ObservedScoreSet::new().with("ss_functional_improvement", 85.0);
    assert_eq!(aggregate(&catalog, &observed), 5.0);
}

#[test]
fn national_averages_rate_in_the_middle() {
    let catalog = MeasureCatalog::builtin().unwrap();
    let b = breakdown(&catalog, &ObservedScoreSet::national_averages(&catalog));
    assert_eq!(b.contributions.len(), catalog.len());
    assert!(b.skipped.is_empty());
    assert!(b.rating > 2.0 && b.rating < 4.0, "rating {}", b.rating);
}

#[test]
fn breakdown_serializes_with_lowercase_status() {
    let catalog = scenario_catalog();
    let b = breakdown(&catalog, &ObservedScoreSet::new().with("falls", 9.0));
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["contributions"][0]["status"], "critical");
    assert_eq!(json["rating"], 1.0);
}
