//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Values set through `with_*` after `from_env()` win over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CALL_DELAY_MS, DEFAULT_LIST_TIMEOUT_SECS,
    DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_STATUS_TIMEOUT_SECS, ENV_LIST_TIMEOUT, ENV_LOGIN_TIMEOUT,
    ENV_STATUS_TIMEOUT, MAX_CALL_DELAY_MS, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, Credentials};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    access_key: Option<String>,
    secret_key: Option<SecretString>,
    login_timeout: Option<Duration>,
    list_timeout: Option<Duration>,
    status_timeout: Option<Duration>,
    call_delay: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `true` or `1`. A missing
    /// `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DotenvParse`] for invalid syntax and
    /// [`ConfigError::DotenvIo`] when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("DOTENV_DISABLED is set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: String) -> Self {
        self.access_key = Some(access_key);
        self
    }

    /// Set the secret key.
    pub fn with_secret_key(mut self, secret_key: String) -> Self {
        self.secret_key = Some(SecretString::new(secret_key.into()));
        self
    }

    /// Set the login call timeout.
    pub fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = Some(timeout);
        self
    }

    /// Set the account listing timeout.
    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    /// Set the per-account status timeout.
    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = Some(timeout);
        self
    }

    /// Set the pause after each per-account status call.
    pub fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = Some(delay);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Fails when the base URL is not an absolute http(s) URL, a credential
    /// is missing or still holds the sample placeholder, or a timeout/delay
    /// is out of range.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let access_key = self
            .access_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingAccessKey)?;
        let secret_key = self
            .secret_key
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingSecretKey)?;

        let credentials = Credentials {
            access_key,
            secret_key,
        };
        if credentials.is_placeholder() {
            return Err(ConfigError::PlaceholderCredentials);
        }

        let connection = ConnectionConfig {
            base_url,
            login_timeout: self
                .login_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS)),
            list_timeout: self
                .list_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_LIST_TIMEOUT_SECS)),
            status_timeout: self
                .status_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_STATUS_TIMEOUT_SECS)),
            call_delay: self
                .call_delay
                .unwrap_or(Duration::from_millis(DEFAULT_CALL_DELAY_MS)),
        };

        Self::validate_connection(&connection)?;

        Ok(Config {
            connection,
            credentials,
        })
    }

    /// Checks every timeout is within `1..=MAX_TIMEOUT_SECS` and the call
    /// delay does not exceed `MAX_CALL_DELAY_MS`.
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        for (var, timeout) in [
            (ENV_LOGIN_TIMEOUT, connection.login_timeout),
            (ENV_LIST_TIMEOUT, connection.list_timeout),
            (ENV_STATUS_TIMEOUT, connection.status_timeout),
        ] {
            let secs = timeout.as_secs();
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout {
                    var: var.to_string(),
                    message: "timeout must be greater than 0 seconds".to_string(),
                });
            }
            if secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout {
                    var: var.to_string(),
                    message: format!(
                        "timeout exceeds maximum allowed value of {} seconds",
                        MAX_TIMEOUT_SECS
                    ),
                });
            }
        }

        let delay_ms = connection.call_delay.as_millis();
        if delay_ms > u128::from(MAX_CALL_DELAY_MS) {
            return Err(ConfigError::InvalidCallDelay {
                message: format!(
                    "{} ms exceeds maximum allowed value of {} ms",
                    delay_ms, MAX_CALL_DELAY_MS
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_access_key(&mut self, access_key: Option<String>) {
        self.access_key = access_key;
    }

    pub(crate) fn set_secret_key(&mut self, secret_key: Option<SecretString>) {
        self.secret_key = secret_key;
    }

    pub(crate) fn set_login_timeout(&mut self, timeout: Option<Duration>) {
        self.login_timeout = timeout;
    }

    pub(crate) fn set_list_timeout(&mut self, timeout: Option<Duration>) {
        self.list_timeout = timeout;
    }

    pub(crate) fn set_status_timeout(&mut self, timeout: Option<Duration>) {
        self.status_timeout = timeout;
    }

    pub(crate) fn set_call_delay(&mut self, delay: Option<Duration>) {
        self.call_delay = delay;
    }
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.prismacloud.io): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.prismacloud.io)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
