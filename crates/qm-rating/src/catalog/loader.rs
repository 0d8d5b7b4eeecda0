//! TOML catalog files.
//!
//! ```toml
//! version = "facility-2024"
//!
//! [[measures]]
//! id = "ls_falls"
//! group = "long-stay"
//! lower_is_better = true
//! weight = 1.0
//! thresholds = { excellent = 1.5, good = 2.5, fair = 4.0, poor = 5.5 }
//! name = "Falls with Major Injury"
//! national_average = 3.2
//! action_plan = ["Run a fall-risk assessment on admission"]
//! ```

use std::path::Path;

use qm_core::config::CatalogConfig;
use qm_core::errors::CatalogError;
use serde::{Deserialize, Serialize};

use super::types::{Measure, MeasureGroup, MeasureInfo, MeasureSpec, Thresholds};
use super::MeasureCatalog;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    #[serde(default)]
    measures: Vec<MeasureRecord>,
}

/// Flat on-disk form of a measure; split into `MeasureSpec` and `MeasureInfo` on load.
#[derive(Debug, Serialize, Deserialize)]
struct MeasureRecord {
    id: String,
    group: MeasureGroup,
    lower_is_better: bool,
    weight: f64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    national_average: f64,
    #[serde(default)]
    action_plan: Vec<String>,
    // Last: serializes as a sub-table.
    thresholds: Thresholds,
}

impl From<MeasureRecord> for Measure {
    fn from(r: MeasureRecord) -> Self {
        Measure::new(
            MeasureSpec {
                id: r.id,
                group: r.group,
                lower_is_better: r.lower_is_better,
                thresholds: r.thresholds,
                weight: r.weight,
            },
            MeasureInfo {
                name: r.name,
                description: r.description,
                national_average: r.national_average,
                action_plan: r.action_plan,
            },
        )
    }
}

impl From<&Measure> for MeasureRecord {
    fn from(m: &Measure) -> Self {
        Self {
            id: m.spec.id.clone(),
            group: m.spec.group,
            lower_is_better: m.spec.lower_is_better,
            weight: m.spec.weight,
            name: m.info.name.clone(),
            description: m.info.description.clone(),
            national_average: m.info.national_average,
            action_plan: m.info.action_plan.clone(),
            thresholds: m.spec.thresholds,
        }
    }
}

impl MeasureCatalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        Self::parse(toml_str, "<string>")
    }

    /// Read, parse, and validate a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// The configured catalog: the file at `catalog.path`, or the built-in one.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match config.path.as_deref() {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// Render the catalog in the same TOML form `from_toml_str` accepts.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            version: self.version.clone(),
            measures: self.measures.iter().map(MeasureRecord::from).collect(),
        };
        toml::to_string_pretty(&file).map_err(|e| CatalogError::Load {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str).map_err(|e| CatalogError::Load {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Self::new(
            file.version,
            file.measures.into_iter().map(Measure::from).collect(),
        )
    }
}
