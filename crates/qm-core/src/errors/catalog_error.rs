//! Measure catalog errors.

use super::error_code::{self, QmErrorCode};

/// Errors raised while loading or querying the measure catalog.
///
/// `Invalid` and `DuplicateId` are fatal at load time: a catalog that
/// fails validation must never be used for scoring.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog entry {measure_id}: {reason}")]
    Invalid { measure_id: String, reason: String },

    #[error("Duplicate measure id in catalog: {id}")]
    DuplicateId { id: String },

    #[error("Measure not found: {id}")]
    NotFound { id: String },

    #[error("Failed to load catalog from {path}: {message}")]
    Load { path: String, message: String },
}

impl CatalogError {
    /// True for errors that mean the catalog itself is unusable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

impl QmErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } | Self::DuplicateId { .. } => error_code::CATALOG_INVALID,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Load { .. } => error_code::CATALOG_LOAD_FAILED,
        }
    }
}
