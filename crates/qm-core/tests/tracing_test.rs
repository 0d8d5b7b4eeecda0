//! Tests for the tracing setup.

use std::sync::Mutex;

use qm_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_qm_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("QM_LOG", "debug");
    init_tracing();
    std::env::remove_var("QM_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still alive after repeated init");
}

#[test]
fn test_invalid_qm_log_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("QM_LOG", "qm_rating=not_a_level=at_all");
    init_tracing();
    std::env::remove_var("QM_LOG");
}
