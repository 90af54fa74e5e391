//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests touching process env use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings cannot leak in.
pub const ALL_PRISMA_VARS: [&str; 7] = [
    "PRISMA_API_URL",
    "PRISMA_ACCESS_KEY",
    "PRISMA_SECRET_KEY",
    "PRISMA_CALL_DELAY_MS",
    "PRISMA_LOGIN_TIMEOUT",
    "PRISMA_LIST_TIMEOUT",
    "PRISMA_STATUS_TIMEOUT",
];

/// Build a `temp_env` variable list that unsets every loader variable
/// except those given in `set`.
pub fn isolated_vars<'a>(set: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
    ALL_PRISMA_VARS
        .iter()
        .map(|name| {
            let value = set.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect()
}
