//! Error handling for the rating engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod observed_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::QmErrorCode;
pub use observed_error::ObservedError;
