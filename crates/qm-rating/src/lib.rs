//! # qm-rating
//!
//! Quality-measure star rating engine: a validated measure catalog, a
//! weighted composite rating calculator, and a what-if simulation
//! comparator that ranks improvement priorities.
//!
//! Everything here is a pure function over in-memory data. The catalog is
//! immutable after load and safe to share across threads.

pub mod calculator;
pub mod catalog;
pub mod observed;
pub mod simulation;

pub use calculator::{aggregate, breakdown, points_for, status_for, RatingBreakdown, StatusTier};
pub use catalog::{Measure, MeasureCatalog, MeasureGroup, MeasureInfo, MeasureSpec, Thresholds};
pub use observed::ObservedScoreSet;
pub use simulation::{
    compare, rank_priorities, target_scenario, Comparison, MeasureChange, PriorityItem,
    SimulationEngine,
};
