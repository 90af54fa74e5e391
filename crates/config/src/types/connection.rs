//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, per-call timeouts, inter-call delay).
//! - Define the main `Config` structure combining connection and credentials.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never ends with a trailing slash once built by the loader.
//! - Default values come from `constants`, not magic numbers.

use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CALL_DELAY_MS, DEFAULT_LIST_TIMEOUT_SECS,
    DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_STATUS_TIMEOUT_SECS,
};
use crate::types::Credentials;

/// Connection settings for the Prisma Cloud API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.prismacloud.io)
    pub base_url: String,
    /// Timeout for `POST /login`
    pub login_timeout: Duration,
    /// Timeout for `GET /cloud`
    pub list_timeout: Duration,
    /// Timeout for each `GET /account/{id}/config/status`
    pub status_timeout: Duration,
    /// Pause after each per-account status call
    pub call_delay: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_timeout: Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS),
            list_timeout: Duration::from_secs(DEFAULT_LIST_TIMEOUT_SECS),
            status_timeout: Duration::from_secs(DEFAULT_STATUS_TIMEOUT_SECS),
            call_delay: Duration::from_millis(DEFAULT_CALL_DELAY_MS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub credentials: Credentials,
}

impl Config {
    /// Create a config with default connection settings for the given base URL.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            credentials,
        }
    }
}
