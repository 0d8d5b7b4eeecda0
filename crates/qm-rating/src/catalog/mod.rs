//! Measure catalog: the authoritative registry of quality measures.
//!
//! Scoring schema (`MeasureSpec`) is kept apart from display payload
//! (`MeasureInfo`) so the calculator never touches presentation text.

pub mod builtin;
pub mod loader;
pub mod types;
pub mod validation;

pub use types::{Measure, MeasureGroup, MeasureInfo, MeasureSpec, Thresholds};

use qm_core::errors::CatalogError;
use rustc_hash::FxHashMap;

/// Immutable, validated set of measures.
///
/// Measures are ordered long-stay first, then short-stay, each group in
/// declaration order. That order is the tie-break order everywhere else.
#[derive(Debug, Clone)]
pub struct MeasureCatalog {
    version: String,
    measures: Vec<Measure>,
    index: FxHashMap<String, usize>,
}

impl MeasureCatalog {
    /// Build a catalog, rejecting it if any measure is invalid or any id repeats.
    pub fn new(version: impl Into<String>, mut measures: Vec<Measure>) -> Result<Self, CatalogError> {
        let version = version.into();
        if measures.is_empty() {
            return Err(CatalogError::Invalid {
                measure_id: "<catalog>".to_string(),
                reason: "catalog has no measures".to_string(),
            });
        }
        for measure in &measures {
            validation::validate_spec(&measure.spec)?;
        }

        // Stable: declaration order survives within each group.
        measures.sort_by_key(|m| m.spec.group);

        let mut index = FxHashMap::default();
        for (pos, measure) in measures.iter().enumerate() {
            if index.insert(measure.spec.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: measure.spec.id.clone(),
                });
            }
        }

        tracing::info!(
            catalog_version = %version,
            measure_count = measures.len(),
            "measure catalog loaded"
        );

        Ok(Self {
            version,
            measures,
            index,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All measures, long-stay then short-stay, in stable order.
    pub fn all_measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Look up a measure, failing with `NotFound` for an unknown id.
    pub fn by_id(&self, id: &str) -> Result<&Measure, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn get(&self, id: &str) -> Option<&Measure> {
        self.index.get(id).map(|&pos| &self.measures[pos])
    }

    /// Declaration-order position of a measure.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Measures belonging to one group, in catalog order.
    pub fn group(&self, group: MeasureGroup) -> impl Iterator<Item = &Measure> {
        self.measures.iter().filter(move |m| m.spec.group == group)
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}
