//! Prisma Cloud REST API client.
//!
//! This crate logs in to the Prisma Cloud API, enumerates cloud accounts and
//! turns each account's configuration status tree into flat report rows.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod flatten;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Session;
pub use client::PrismaClient;
pub use client::builder::PrismaClientBuilder;
pub use client::report::{CollectOptions, ProgressCallback};
pub use error::{ClientError, Result, StatusFetchError};
pub use flatten::{UnmessagedIssuePolicy, error_row, flatten_status};
pub use models::{Account, REPORT_HEADERS, ReportRow, StatusComponent};
pub use prisma_config::Credentials;
