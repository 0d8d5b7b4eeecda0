//! Tests for the error handling system.

use std::collections::HashSet;

use qm_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let codes = [
        CatalogError::Invalid {
            measure_id: "ls_falls".into(),
            reason: "weight must be positive".into(),
        }
        .error_code(),
        CatalogError::NotFound { id: "nope".into() }.error_code(),
        ConfigError::FileNotFound { path: "/tmp".into() }.error_code(),
        ObservedError::Parse { message: "bad".into() }.error_code(),
    ];

    for code in codes {
        assert!(!code.is_empty());
    }
}

#[test]
fn test_catalog_error_codes() {
    let invalid = CatalogError::Invalid {
        measure_id: "x".into(),
        reason: "r".into(),
    };
    let dup = CatalogError::DuplicateId { id: "x".into() };
    let missing = CatalogError::NotFound { id: "x".into() };
    let load = CatalogError::Load {
        path: "c.toml".into(),
        message: "m".into(),
    };

    assert_eq!(invalid.error_code(), "CATALOG_INVALID");
    assert_eq!(dup.error_code(), "CATALOG_INVALID");
    assert_eq!(missing.error_code(), "NOT_FOUND");
    assert_eq!(load.error_code(), "CATALOG_LOAD_FAILED");

    let codes: HashSet<_> = [&invalid, &missing, &load]
        .iter()
        .map(|e| e.error_code())
        .collect();
    assert_eq!(codes.len(), 3);
}

#[test]
fn test_not_found_is_recoverable() {
    assert!(!CatalogError::NotFound { id: "x".into() }.is_fatal());
    assert!(CatalogError::DuplicateId { id: "x".into() }.is_fatal());
}

#[test]
fn test_boundary_string_format() {
    let err = CatalogError::NotFound {
        id: "ls_pressure_ulcers".into(),
    };
    assert_eq!(
        err.boundary_string(),
        "[NOT_FOUND] Measure not found: ls_pressure_ulcers"
    );
}

#[test]
fn test_engine_error_delegates_code() {
    let err: EngineError = CatalogError::DuplicateId { id: "ls_falls".into() }.into();
    assert_eq!(err.error_code(), "CATALOG_INVALID");

    let err: EngineError = ConfigError::ValidationFailed {
        field: "rating.priority_limit".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
