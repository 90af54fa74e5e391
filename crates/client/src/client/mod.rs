//! Prisma Cloud API client and its operations.
//!
//! This module provides [`PrismaClient`], a thin stateful wrapper around a
//! `reqwest::Client` plus the normalized base URL and per-call timeouts.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login
//! - `accounts`: Cloud account enumeration
//! - `status`: Per-account configuration status
//! - [`report`]: Paced collection of report rows across accounts
//!
//! # What this module does NOT handle:
//! - Request/response mechanics (delegated to [`crate::endpoints`])
//! - Turning status trees into rows (delegated to [`crate::flatten`])
//!
//! # Invariants
//! - The client holds no token; every authenticated call borrows a [`crate::Session`].
//! - No call is retried.

mod accounts;
pub mod builder;
pub mod report;
mod session;
mod status;

use std::time::Duration;

/// Prisma Cloud REST API client.
///
/// ```rust,ignore
/// use prisma_client::{Credentials, PrismaClient};
///
/// let client = PrismaClient::builder()
///     .base_url("https://api.prismacloud.io".to_string())
///     .build()?;
/// let session = client.login(&Credentials::new("key", "secret")).await?;
/// let accounts = client.list_accounts(&session).await?;
/// ```
#[derive(Debug)]
pub struct PrismaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) login_timeout: Duration,
    pub(crate) list_timeout: Duration,
    pub(crate) status_timeout: Duration,
}

impl PrismaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PrismaClientBuilder {
        builder::PrismaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
