//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::rating_config::TARGET_TIERS;
use super::{CatalogConfig, RatingConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`QM_*`)
/// 3. Project config (`qm.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QmConfig {
    pub rating: RatingConfig,
    pub catalog: CatalogConfig,
}

/// Caller-supplied overrides, e.g. from a command line or request.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub priority_limit: Option<usize>,
    pub target_tier: Option<String>,
    pub catalog_path: Option<PathBuf>,
}

impl QmConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        if let Some(path) = config.catalog.path.as_mut() {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }

        Self::validate(&config)?;

        tracing::debug!(
            priority_limit = config.rating.effective_priority_limit(),
            target_tier = config.rating.effective_target_tier(),
            builtin_catalog = config.catalog.uses_builtin(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &QmConfig) -> Result<(), ConfigError> {
        if let Some(limit) = config.rating.priority_limit {
            if limit == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "rating.priority_limit".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref tier) = config.rating.target_tier {
            if !TARGET_TIERS.contains(&tier.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "rating.target_tier".to_string(),
                    message: format!("must be one of {}", TARGET_TIERS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut QmConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: QmConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut QmConfig, other: &QmConfig) {
        if other.rating.priority_limit.is_some() {
            base.rating.priority_limit = other.rating.priority_limit;
        }
        if other.rating.target_tier.is_some() {
            base.rating.target_tier = other.rating.target_tier.clone();
        }
        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }
    }

    /// Apply `QM_*` environment variables.
    fn apply_env_overrides(config: &mut QmConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("QM_PRIORITY_LIMIT") {
            let limit = val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "QM_PRIORITY_LIMIT".to_string(),
                message: format!("expected a positive integer, got {val:?}"),
            })?;
            config.rating.priority_limit = Some(limit);
        }
        if let Ok(val) = std::env::var("QM_TARGET_TIER") {
            config.rating.target_tier = Some(val.trim().to_lowercase());
        }
        if let Ok(val) = std::env::var("QM_CATALOG_PATH") {
            if !val.is_empty() {
                config.catalog.path = Some(PathBuf::from(val));
            }
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut QmConfig, overrides: &ConfigOverrides) {
        if let Some(limit) = overrides.priority_limit {
            config.rating.priority_limit = Some(limit);
        }
        if let Some(ref tier) = overrides.target_tier {
            config.rating.target_tier = Some(tier.clone());
        }
        if let Some(ref path) = overrides.catalog_path {
            config.catalog.path = Some(path.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }
}
