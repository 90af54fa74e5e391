//! Client builder for constructing [`PrismaClient`] instances.
//!
//! # Invariants
//! - `base_url` is required and is normalized to have no trailing slashes.
//! - Timeouts are applied per request, so one client serves calls with
//!   different limits.

use std::time::Duration;

use prisma_config::Config;
use prisma_config::constants::{
    DEFAULT_LIST_TIMEOUT_SECS, DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_STATUS_TIMEOUT_SECS,
};

use crate::client::PrismaClient;
use crate::error::{ClientError, Result};

/// Maximum number of HTTP redirects followed.
const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`PrismaClient`].
pub struct PrismaClientBuilder {
    base_url: Option<String>,
    login_timeout: Duration,
    list_timeout: Duration,
    status_timeout: Duration,
}

impl Default for PrismaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            login_timeout: Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS),
            list_timeout: Duration::from_secs(DEFAULT_LIST_TIMEOUT_SECS),
            status_timeout: Duration::from_secs(DEFAULT_STATUS_TIMEOUT_SECS),
        }
    }
}

impl PrismaClientBuilder {
    /// Create a new builder with default timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.prismacloud.io`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the timeout for `POST /login`. Default is 30 seconds.
    pub fn login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    /// Set the timeout for `GET /cloud`. Default is 60 seconds.
    pub fn list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }

    /// Set the timeout for each status call. Default is 30 seconds.
    pub fn status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.login_timeout = config.connection.login_timeout;
        self.list_timeout = config.connection.list_timeout;
        self.status_timeout = config.connection.status_timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`PrismaClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// is blank, and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PrismaClient> {
        let base_url = self
            .base_url
            .map(Self::normalize_base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(PrismaClient {
            http,
            base_url,
            login_timeout: self.login_timeout,
            list_timeout: self.list_timeout,
            status_timeout: self.status_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prisma_config::Credentials;

    #[test]
    fn test_builder_missing_base_url() {
        let result = PrismaClient::builder().build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = PrismaClient::builder()
            .base_url("https://api.prismacloud.io//".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.prismacloud.io");
    }

    #[test]
    fn test_builder_defaults() {
        let client = PrismaClient::builder()
            .base_url("https://api.prismacloud.io".to_string())
            .build()
            .unwrap();
        assert_eq!(client.login_timeout, Duration::from_secs(30));
        assert_eq!(client.list_timeout, Duration::from_secs(60));
        assert_eq!(client.status_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::new("https://api2.prismacloud.io", Credentials::new("a", "b"));
        config.connection.list_timeout = Duration::from_secs(120);

        let client = PrismaClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "https://api2.prismacloud.io");
        assert_eq!(client.list_timeout, Duration::from_secs(120));
        assert_eq!(client.status_timeout, Duration::from_secs(30));
    }
}
