//! QmErrorCode trait for boundary consumers.

/// Every error enum implements this to expose a structured error code
/// string to whatever presentation layer consumes the engine.
pub trait QmErrorCode {
    /// Returns the error code string (e.g., "CATALOG_INVALID").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CATALOG_INVALID: &str = "CATALOG_INVALID";
pub const CATALOG_LOAD_FAILED: &str = "CATALOG_LOAD_FAILED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const OBSERVED_PARSE_ERROR: &str = "OBSERVED_PARSE_ERROR";
