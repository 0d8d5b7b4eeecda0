//! Rating calculator: per-measure points and status, weighted composite.

pub mod aggregate;
pub mod tier;

pub use aggregate::{aggregate, breakdown, MeasureContribution, RatingBreakdown};
pub use tier::{points_for, status_for, threshold_for, StatusTier};
