//! Centralized constants for the Prisma config-status workspace.
//!
//! Default values used across crates live here so the client, loader and
//! CLI agree on them.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Prisma Cloud API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.prismacloud.io";

/// Default timeout for the login call in seconds.
pub const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 30;

/// Default timeout for the cloud account listing call in seconds.
///
/// Listing is slower than the other calls on tenants with many accounts.
pub const DEFAULT_LIST_TIMEOUT_SECS: u64 = 60;

/// Default timeout for each per-account status call in seconds.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed timeout for any single call in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Rate Limiting
// =============================================================================

/// Default delay between per-account status calls in milliseconds.
pub const DEFAULT_CALL_DELAY_MS: u64 = 500;

/// Maximum allowed delay between per-account status calls in milliseconds.
pub const MAX_CALL_DELAY_MS: u64 = 60_000;

// =============================================================================
// Credentials
// =============================================================================

/// Placeholder access key shipped in sample configuration.
pub const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_ACCESS_KEY_ID";

/// Placeholder secret key shipped in sample configuration.
pub const PLACEHOLDER_SECRET_KEY: &str = "YOUR_SECRET_KEY";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "PRISMA_API_URL";
pub const ENV_ACCESS_KEY: &str = "PRISMA_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "PRISMA_SECRET_KEY";
pub const ENV_CALL_DELAY_MS: &str = "PRISMA_CALL_DELAY_MS";
pub const ENV_LOGIN_TIMEOUT: &str = "PRISMA_LOGIN_TIMEOUT";
pub const ENV_LIST_TIMEOUT: &str = "PRISMA_LIST_TIMEOUT";
pub const ENV_STATUS_TIMEOUT: &str = "PRISMA_STATUS_TIMEOUT";

// =============================================================================
// Report Output
// =============================================================================

/// Default path of the generated CSV report.
pub const DEFAULT_REPORT_FILE: &str = "prisma_cloud_config_status_report.csv";
