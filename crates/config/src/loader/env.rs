//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `PRISMA_*` variables and apply them to a `ConfigLoader`.
//! - Treat empty or whitespace-only variables as unset.
//!
//! Does NOT handle:
//! - `.env` file loading (see `ConfigLoader::load_dotenv`).
//! - Range validation (see `ConfigLoader::build`).

use std::time::Duration;

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ACCESS_KEY, ENV_BASE_URL, ENV_CALL_DELAY_MS, ENV_LIST_TIMEOUT, ENV_LOGIN_TIMEOUT,
    ENV_SECRET_KEY, ENV_STATUS_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_u64(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative integer".to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(access_key) = env_var_or_none(ENV_ACCESS_KEY) {
        loader.set_access_key(Some(access_key));
    }
    if let Some(secret_key) = env_var_or_none(ENV_SECRET_KEY) {
        loader.set_secret_key(Some(SecretString::new(secret_key.into())));
    }
    if let Some(delay) = env_var_or_none(ENV_CALL_DELAY_MS) {
        let millis = parse_u64(ENV_CALL_DELAY_MS, &delay)?;
        loader.set_call_delay(Some(Duration::from_millis(millis)));
    }
    if let Some(timeout) = env_var_or_none(ENV_LOGIN_TIMEOUT) {
        let secs = parse_u64(ENV_LOGIN_TIMEOUT, &timeout)?;
        loader.set_login_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(timeout) = env_var_or_none(ENV_LIST_TIMEOUT) {
        let secs = parse_u64(ENV_LIST_TIMEOUT, &timeout)?;
        loader.set_list_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(timeout) = env_var_or_none(ENV_STATUS_TIMEOUT) {
        let secs = parse_u64(ENV_STATUS_TIMEOUT, &timeout)?;
        loader.set_status_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
