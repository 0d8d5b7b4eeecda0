//! # qm-core
//!
//! Foundation crate for the quality-measure star rating engine.
//! Defines errors, configuration, tracing setup, and shared constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::QmConfig;
pub use errors::{CatalogError, ConfigError, EngineError, ObservedError, QmErrorCode};
