//! Built-in CMS-style quality measure catalog.
//!
//! Percentages are facility-level rates. Weights are 1.0 or 1.5; the
//! heavier measures are the ones CMS treats as outcome-critical.

use qm_core::errors::CatalogError;

use super::types::{Measure, MeasureGroup, MeasureInfo, MeasureSpec, Thresholds};
use super::MeasureCatalog;

/// Version tag of the built-in catalog.
pub const BUILTIN_VERSION: &str = "cms-qm-2024.1";

struct Row {
    id: &'static str,
    group: MeasureGroup,
    lower_is_better: bool,
    thresholds: [f64; 4],
    weight: f64,
    national_average: f64,
    name: &'static str,
    description: &'static str,
    action_plan: &'static [&'static str],
}

const ROWS: &[Row] = &[
    // Long-stay
    Row {
        id: "ls_falls",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [1.5, 2.5, 4.0, 5.5],
        weight: 1.0,
        national_average: 3.2,
        name: "Falls with Major Injury",
        description: "Percentage of long-stay residents experiencing one or more falls with major injury.",
        action_plan: &[
            "Run a fall-risk assessment on admission and quarterly",
            "Install bed and chair alarms for high-risk residents",
            "Review sedating medications with the consulting pharmacist",
            "Schedule hourly rounding for residents with prior falls",
        ],
    },
    Row {
        id: "ls_pressure_ulcers",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [3.0, 5.0, 7.5, 10.0],
        weight: 1.5,
        national_average: 6.5,
        name: "High-Risk Residents with Pressure Ulcers",
        description: "Percentage of high-risk long-stay residents with stage 2-4 or unstageable pressure ulcers.",
        action_plan: &[
            "Perform Braden scale screening weekly",
            "Implement a two-hour repositioning schedule",
            "Provide pressure-redistributing mattresses",
            "Refer at-risk residents for nutrition consults",
        ],
    },
    Row {
        id: "ls_uti",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [1.0, 2.0, 3.0, 4.5],
        weight: 1.0,
        national_average: 2.5,
        name: "Urinary Tract Infection",
        description: "Percentage of long-stay residents with a urinary tract infection.",
        action_plan: &[
            "Audit perineal care technique on every shift",
            "Encourage hydration rounds between meals",
            "Apply antibiotic stewardship criteria before treating",
        ],
    },
    Row {
        id: "ls_catheter",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [0.5, 1.0, 2.0, 3.0],
        weight: 1.0,
        national_average: 1.6,
        name: "Indwelling Catheter",
        description: "Percentage of long-stay residents who have or had a catheter inserted and left in the bladder.",
        action_plan: &[
            "Review every catheter for a documented indication",
            "Adopt a nurse-driven catheter removal protocol",
            "Trial bladder training before catheter placement",
        ],
    },
    Row {
        id: "ls_antipsychotic",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [8.0, 12.0, 16.0, 22.0],
        weight: 1.5,
        national_average: 14.5,
        name: "Antipsychotic Medication Use",
        description: "Percentage of long-stay residents who received an antipsychotic medication.",
        action_plan: &[
            "Hold monthly gradual dose reduction reviews",
            "Train staff in non-pharmacological dementia care",
            "Require psychiatric consult for new orders",
            "Track behaviors to identify unmet needs",
        ],
    },
    Row {
        id: "ls_adl_decline",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [10.0, 14.0, 18.0, 22.0],
        weight: 1.0,
        national_average: 15.8,
        name: "Increased Need for Help with Daily Activities",
        description: "Percentage of long-stay residents whose need for help with activities of daily living has increased.",
        action_plan: &[
            "Build restorative nursing programs for ADLs",
            "Encourage residents to perform self-care tasks",
            "Coordinate therapy screens after any decline",
        ],
    },
    Row {
        id: "ls_mobility_decline",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [12.0, 16.0, 20.0, 25.0],
        weight: 1.0,
        national_average: 18.5,
        name: "Decline in Ability to Move Independently",
        description: "Percentage of long-stay residents whose ability to walk independently worsened.",
        action_plan: &[
            "Offer daily walking programs",
            "Reassess mobility aids each quarter",
            "Add strength and balance exercise groups",
        ],
    },
    Row {
        id: "ls_depressive_symptoms",
        group: MeasureGroup::LongStay,
        lower_is_better: true,
        thresholds: [2.0, 5.0, 8.0, 12.0],
        weight: 1.0,
        national_average: 6.8,
        name: "Depressive Symptoms",
        description: "Percentage of long-stay residents who have depressive symptoms.",
        action_plan: &[
            "Screen with PHQ-9 on admission and quarterly",
            "Expand meaningful activity programming",
            "Arrange behavioral health follow-up for positive screens",
        ],
    },
    Row {
        id: "ls_flu_vaccine",
        group: MeasureGroup::LongStay,
        lower_is_better: false,
        thresholds: [98.0, 95.0, 90.0, 85.0],
        weight: 1.0,
        national_average: 94.5,
        name: "Seasonal Influenza Vaccine",
        description: "Percentage of long-stay residents assessed and appropriately given the seasonal influenza vaccine.",
        action_plan: &[
            "Offer vaccination at admission during flu season",
            "Document declinations with education provided",
            "Run a facility-wide vaccination clinic each October",
        ],
    },
    // Short-stay
    Row {
        id: "ss_rehospitalization",
        group: MeasureGroup::ShortStay,
        lower_is_better: true,
        thresholds: [15.0, 18.0, 24.0, 30.0],
        weight: 1.5,
        national_average: 21.5,
        name: "Rehospitalization",
        description: "Percentage of short-stay residents who were re-hospitalized after a nursing home admission.",
        action_plan: &[
            "Adopt INTERACT early-warning tools",
            "Hold medication reconciliation within 24 hours of admission",
            "Arrange physician review for change-of-condition alerts",
            "Schedule follow-up calls after discharge",
        ],
    },
    Row {
        id: "ss_ed_visits",
        group: MeasureGroup::ShortStay,
        lower_is_better: true,
        thresholds: [8.0, 10.0, 13.0, 16.0],
        weight: 1.0,
        national_average: 11.4,
        name: "Outpatient Emergency Department Visits",
        description: "Percentage of short-stay residents who had an outpatient emergency department visit.",
        action_plan: &[
            "Provide on-site lab and imaging access",
            "Set up after-hours telehealth physician coverage",
            "Train nurses in SBAR communication",
        ],
    },
    Row {
        id: "ss_functional_improvement",
        group: MeasureGroup::ShortStay,
        lower_is_better: false,
        thresholds: [80.0, 75.0, 68.0, 60.0],
        weight: 1.5,
        national_average: 71.2,
        name: "Improvement in Function",
        description: "Percentage of short-stay residents who made improvements in function.",
        action_plan: &[
            "Set individualized functional goals on admission",
            "Increase therapy minutes for high-potential residents",
            "Reinforce therapy goals during nursing care",
        ],
    },
    Row {
        id: "ss_discharge_community",
        group: MeasureGroup::ShortStay,
        lower_is_better: false,
        thresholds: [65.0, 58.0, 50.0, 42.0],
        weight: 1.5,
        national_average: 54.0,
        name: "Successful Discharge to the Community",
        description: "Percentage of short-stay residents successfully discharged to the community.",
        action_plan: &[
            "Start discharge planning on the day of admission",
            "Involve family caregivers in training sessions",
            "Coordinate home health referrals before discharge",
        ],
    },
    Row {
        id: "ss_antipsychotic_new",
        group: MeasureGroup::ShortStay,
        lower_is_better: true,
        thresholds: [0.8, 1.5, 2.5, 3.5],
        weight: 1.0,
        national_average: 1.9,
        name: "Newly Received Antipsychotic Medication",
        description: "Percentage of short-stay residents who newly received an antipsychotic medication.",
        action_plan: &[
            "Require documented indication for new antipsychotic orders",
            "Screen for delirium before prescribing",
            "Review orders at the weekly interdisciplinary meeting",
        ],
    },
    Row {
        id: "ss_pressure_ulcers_new",
        group: MeasureGroup::ShortStay,
        lower_is_better: true,
        thresholds: [1.0, 2.0, 3.0, 4.5],
        weight: 1.0,
        national_average: 2.4,
        name: "New or Worsened Pressure Ulcers",
        description: "Percentage of short-stay residents with pressure ulcers that are new or worsened.",
        action_plan: &[
            "Complete skin assessment within 8 hours of admission",
            "Use heel protection for immobile residents",
            "Track turning compliance on every shift",
        ],
    },
    Row {
        id: "ss_pneumococcal_vaccine",
        group: MeasureGroup::ShortStay,
        lower_is_better: false,
        thresholds: [97.0, 93.0, 88.0, 80.0],
        weight: 1.0,
        national_average: 90.0,
        name: "Pneumococcal Vaccine",
        description: "Percentage of short-stay residents assessed and appropriately given the pneumococcal vaccine.",
        action_plan: &[
            "Check vaccination history at admission",
            "Add standing orders for eligible residents",
            "Audit vaccine documentation monthly",
        ],
    },
];

fn to_measure(row: &Row) -> Measure {
    let [excellent, good, fair, poor] = row.thresholds;
    Measure::new(
        MeasureSpec {
            id: row.id.to_string(),
            group: row.group,
            lower_is_better: row.lower_is_better,
            thresholds: Thresholds::new(excellent, good, fair, poor),
            weight: row.weight,
        },
        MeasureInfo {
            name: row.name.to_string(),
            description: row.description.to_string(),
            national_average: row.national_average,
            action_plan: row.action_plan.iter().map(|s| s.to_string()).collect(),
        },
    )
}

impl MeasureCatalog {
    /// The built-in catalog. Validated like any other catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN_VERSION, ROWS.iter().map(to_measure).collect())
    }
}
