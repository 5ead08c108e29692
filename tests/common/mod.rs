//! Shared helpers for the integration test suites.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber for test output.
///
/// Safe to call from every test; only the first call installs anything.
/// Verbosity follows `RUST_LOG` (default `info`).
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Proptest configuration with an explicit case count and no failure
/// persistence (keeps CI runs reproducible from the seed alone).
#[allow(dead_code)]
pub fn test_proptest_config(cases: u32) -> proptest::test_runner::Config {
    proptest::test_runner::Config {
        cases,
        failure_persistence: None,
        ..proptest::test_runner::Config::default()
    }
}
