//! Observed score sets: measure id → raw percentage.
//!
//! A set is owned by its caller and carries no identity beyond its
//! contents. "Current performance" and a "what-if" projection are just two
//! sets. Persisted form is a flat JSON object, `{"ls_falls": 3.2, ...}`.

use std::collections::BTreeMap;

use qm_core::errors::ObservedError;
use serde::{Deserialize, Serialize};

use crate::catalog::MeasureCatalog;

/// Mapping from measure id to observed value. Measures may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservedScoreSet {
    values: BTreeMap<String, f64>,
}

impl ObservedScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog measure at its national average. Handy seed data.
    pub fn national_averages(catalog: &MeasureCatalog) -> Self {
        catalog
            .all_measures()
            .iter()
            .map(|m| (m.id().to_string(), m.info.national_average))
            .collect()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(id.into(), value)
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<String>, value: f64) -> Self {
        self.insert(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn remove(&mut self, id: &str) -> Option<f64> {
        self.values.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn from_json(json: &str) -> Result<Self, ObservedError> {
        serde_json::from_str(json).map_err(|e| ObservedError::Parse {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, ObservedError> {
        serde_json::to_string(self).map_err(|e| ObservedError::Parse {
            message: e.to_string(),
        })
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ObservedScoreSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
