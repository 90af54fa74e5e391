//! Testing utilities for Prisma client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use prisma_client::testing::load_fixture;
//!
//! let accounts = load_fixture("accounts/list_accounts.json");
//! ```

use std::path::Path;

use crate::models::Account;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "status/all_ok.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A small set of accounts with distinct ids, names, and cloud types.
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("111111111111", "Production", "aws"),
        Account::new("sub-2222", "Staging", "azure"),
        Account::new("proj-3333", "Analytics", "gcp"),
    ]
}
