//! Shared constants for the star rating engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest composite star rating.
pub const MIN_RATING: f64 = 1.0;

/// Highest composite star rating.
pub const MAX_RATING: f64 = 5.0;

/// Rating returned when no observed measure can be scored.
pub const DEFAULT_RATING: f64 = 3.0;

/// Default number of improvement priorities returned.
pub const DEFAULT_PRIORITY_LIMIT: usize = 5;

/// Default tier a target what-if scenario lifts measures to.
pub const DEFAULT_TARGET_TIER: &str = "good";

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "qm.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "QM_LOG";

/// Filter used when `QM_LOG` is absent or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "qm_core=info,qm_rating=info";
