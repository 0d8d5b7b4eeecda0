//! Engine-level errors aggregating subsystem errors.

use super::error_code::QmErrorCode;
use super::{CatalogError, ConfigError, ObservedError};

/// Errors surfaced while assembling or driving a rating engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Observed data error: {0}")]
    Observed(#[from] ObservedError),
}

impl QmErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Observed(e) => e.error_code(),
        }
    }
}
