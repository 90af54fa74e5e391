//! Flattened report rows.

use serde::{Deserialize, Serialize};

use crate::models::Account;

/// Column order of the CSV report.
pub const REPORT_HEADERS: [&str; 7] = [
    "AccountID",
    "AccountName",
    "CloudType",
    "Category",
    "ServiceContext",
    "Status",
    "Message",
];

/// One flattened output record. Field order matches [`REPORT_HEADERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "AccountName")]
    pub account_name: String,
    #[serde(rename = "CloudType")]
    pub cloud_type: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "ServiceContext")]
    pub service_context: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl ReportRow {
    /// Build a row carrying the account's identifying columns.
    pub fn for_account(
        account: &Account,
        category: impl Into<String>,
        service_context: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account.account_id.clone(),
            account_name: account.name.clone(),
            cloud_type: account.cloud_type.clone(),
            category: category.into(),
            service_context: service_context.into(),
            status: status.into(),
            message: message.into(),
        }
    }
}
