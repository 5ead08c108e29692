//! Shared helpers for the in-crate unit tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber for test output.
///
/// Safe to call from every test; only the first call installs anything.
/// Verbosity follows `RUST_LOG` (default `info`). Output goes through the
/// test writer so it is captured per-test and shown only on failure.
pub(crate) fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Marks the start of a named test phase in the log.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = $name, "=== phase ===");
    };
}

/// Marks a test as complete in the log.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "complete");
    };
}

/// Asserts a condition, logging the expected and actual values either way.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $label:expr, $expected:expr, $actual:expr) => {
        if $cond {
            tracing::debug!(check = $label, expected = ?$expected, actual = ?$actual, "ok");
        } else {
            tracing::error!(check = $label, expected = ?$expected, actual = ?$actual, "failed");
            panic!(
                "check failed: {} (expected {:?}, got {:?})",
                $label, $expected, $actual
            );
        }
    };
}
