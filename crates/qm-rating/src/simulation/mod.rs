//! Simulation comparator: current vs what-if ratings and ranked priorities.

pub mod compare;
pub mod engine;
pub mod priorities;
pub mod scenario;
pub mod types;

pub use compare::compare;
pub use engine::SimulationEngine;
pub use priorities::rank_priorities;
pub use scenario::target_scenario;
pub use types::{Comparison, MeasureChange, PriorityItem};
