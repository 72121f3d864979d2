//! Tests for the coursemine tracing setup.

use std::sync::Mutex;

use coursemine_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_custom_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("COURSEMINE_LOG", "coursemine_analysis::mining=debug,coursemine_analysis::loader=warn");
    init_tracing();
    std::env::remove_var("COURSEMINE_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still logging after repeated init");
}
