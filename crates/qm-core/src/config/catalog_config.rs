//! Measure catalog configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the measure catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file replacing the built-in catalog. Relative paths
    /// are resolved against the project root.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// True when the built-in catalog should be used.
    pub fn uses_builtin(&self) -> bool {
        self.path.is_none()
    }
}
