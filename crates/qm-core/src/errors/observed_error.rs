//! Errors for persisted observed score sets.

use super::error_code::{self, QmErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ObservedError {
    #[error("Malformed observed score set: {message}")]
    Parse { message: String },
}

impl QmErrorCode for ObservedError {
    fn error_code(&self) -> &'static str {
        error_code::OBSERVED_PARSE_ERROR
    }
}
