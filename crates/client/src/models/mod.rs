//! Data models for Prisma Cloud API responses and report output.
//!
//! # Submodules
//! - [`account`]: Cloud account listing and its projection
//! - [`status`]: Per-account configuration status tree
//! - [`report`]: Flattened CSV report rows

pub mod account;
pub mod report;
pub mod status;

pub use account::{Account, CloudAccountEntry};
pub use report::{REPORT_HEADERS, ReportRow};
pub use status::StatusComponent;
