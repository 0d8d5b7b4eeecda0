//! Configured simulation front end over a shared catalog.

use std::sync::Arc;

use qm_core::config::{QmConfig, RatingConfig};
use qm_core::errors::{CatalogError, EngineError};

use crate::calculator::{self, RatingBreakdown, StatusTier};
use crate::catalog::MeasureCatalog;
use crate::observed::ObservedScoreSet;

use super::types::{Comparison, PriorityItem};
use super::{compare, rank_priorities, target_scenario};

/// Catalog plus rating settings, cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    catalog: Arc<MeasureCatalog>,
    priority_limit: usize,
    target_tier: StatusTier,
}

impl SimulationEngine {
    /// Engine over `catalog` with the given rating settings.
    pub fn new(catalog: Arc<MeasureCatalog>, config: &RatingConfig) -> Result<Self, EngineError> {
        let target_tier = config.effective_target_tier().parse::<StatusTier>()?;
        Ok(Self {
            catalog,
            priority_limit: config.effective_priority_limit(),
            target_tier,
        })
    }

    /// Load the configured catalog and build an engine. Catalog errors are
    /// fatal here; callers should abort startup on `Err`.
    pub fn from_config(config: &QmConfig) -> Result<Self, EngineError> {
        let catalog = MeasureCatalog::from_config(&config.catalog)?;
        Self::new(Arc::new(catalog), &config.rating)
    }

    pub fn catalog(&self) -> &MeasureCatalog {
        &self.catalog
    }

    pub fn priority_limit(&self) -> usize {
        self.priority_limit
    }

    pub fn target_tier(&self) -> StatusTier {
        self.target_tier
    }

    pub fn aggregate(&self, observed: &ObservedScoreSet) -> f64 {
        calculator::aggregate(&self.catalog, observed)
    }

    pub fn breakdown(&self, observed: &ObservedScoreSet) -> RatingBreakdown {
        calculator::breakdown(&self.catalog, observed)
    }

    /// Points for one measure, `NotFound` for an unknown id.
    pub fn points_for(&self, id: &str, value: f64) -> Result<u8, CatalogError> {
        let measure = self.catalog.by_id(id)?;
        Ok(calculator::points_for(&measure.spec, value))
    }

    /// Status for one measure, `NotFound` for an unknown id.
    pub fn status_for(&self, id: &str, value: f64) -> Result<StatusTier, CatalogError> {
        let measure = self.catalog.by_id(id)?;
        Ok(calculator::status_for(&measure.spec, value))
    }

    pub fn compare(&self, current: &ObservedScoreSet, what_if: &ObservedScoreSet) -> Comparison {
        compare(&self.catalog, current, what_if)
    }

    /// Priorities truncated to the configured limit.
    pub fn rank_priorities(&self, current: &ObservedScoreSet) -> Vec<PriorityItem<'_>> {
        rank_priorities(&self.catalog, current, self.priority_limit)
    }

    /// The what-if set reaching the configured target tier.
    pub fn target_scenario(&self, current: &ObservedScoreSet) -> ObservedScoreSet {
        target_scenario(&self.catalog, current, self.target_tier)
    }

    /// Compare `current` against its target scenario.
    pub fn project_target(&self, current: &ObservedScoreSet) -> Comparison {
        let what_if = self.target_scenario(current);
        self.compare(current, &what_if)
    }
}
