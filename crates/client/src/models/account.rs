//! Cloud account models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::opt_string_lenient;

/// Value used when an account field is absent from the listing.
pub const MISSING_FIELD: &str = "N/A";

/// One entry of the `GET /cloud` listing as returned by the API.
///
/// Only the fields the report needs are kept; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudAccountEntry {
    #[serde(rename = "accountId", default, deserialize_with = "opt_string_lenient")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub name: Option<String>,
    #[serde(rename = "cloudType", default, deserialize_with = "opt_string_lenient")]
    pub cloud_type: Option<String>,
}

/// A cloud account projected to what the report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "AccountName")]
    pub name: String,
    #[serde(rename = "CloudType")]
    pub cloud_type: String,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        name: impl Into<String>,
        cloud_type: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            name: name.into(),
            cloud_type: cloud_type.into(),
        }
    }
}

impl CloudAccountEntry {
    /// Project to an [`Account`], or `None` if the entry has no account id.
    pub fn into_account(self) -> Option<Account> {
        let account_id = self.account_id.filter(|id| !id.is_empty())?;
        Some(Account {
            account_id,
            name: self.name.unwrap_or_else(|| MISSING_FIELD.to_string()),
            cloud_type: self.cloud_type.unwrap_or_else(|| MISSING_FIELD.to_string()),
        })
    }
}

/// Project a raw listing, dropping entries without an account id.
pub fn project_accounts(entries: Vec<CloudAccountEntry>) -> Vec<Account> {
    entries
        .into_iter()
        .filter_map(CloudAccountEntry::into_account)
        .collect()
}
