//! Configuration system for the rating engine.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod catalog_config;
pub mod qm_config;
pub mod rating_config;

pub use catalog_config::CatalogConfig;
pub use qm_config::{ConfigOverrides, QmConfig};
pub use rating_config::RatingConfig;
