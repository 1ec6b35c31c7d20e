//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and validation.
//! - Test environment variable handling and precedence.
//! - Test config file loading.
//! - Test dotenv gating.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    [
        "COVERSHEET_REVEAL_DELAY_MS",
        "COVERSHEET_DISMISS_DELAY_MS",
        "COVERSHEET_TRANSITION_MS",
        "COVERSHEET_BACKDROP_OPACITY",
        "COVERSHEET_DEFOCUS_LEVEL",
        "COVERSHEET_CURVE",
        "COVERSHEET_THEME",
        "COVERSHEET_CONFIG_PATH",
    ]
    .into_iter()
    .map(|k| (k, None))
    .collect()
}
