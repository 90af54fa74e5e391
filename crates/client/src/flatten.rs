//! Reduction of an account's status tree to report rows.
//!
//! Responsibilities:
//! - Surface every non-ok category and sub-component that carries a message.
//! - Emit one OK summary row for accounts whose categories are all ok.
//! - Map a failed fetch to exactly one error row.
//!
//! Does NOT handle:
//! - HTTP or pacing between accounts (see `client::report`).
//!
//! Invariants:
//! - Pure functions: identical input always yields identical rows.
//! - Rows keep category order, and sub-component order within a category.
//! - With [`UnmessagedIssuePolicy::Report`] every account yields at least one row.

use serde_json::Value;

use crate::error::StatusFetchError;
use crate::models::{Account, ReportRow, StatusComponent};

pub const NO_DATA_CATEGORY: &str = "Overall Account Status";
pub const NO_DATA_STATUS: &str = "No Data/Invalid Format";
pub const NO_DATA_MESSAGE: &str =
    "No valid component data returned from API or response format was unexpected.";

pub const OK_SUMMARY_CATEGORY: &str = "Overall Config Status";
pub const OK_SUMMARY_STATUS: &str = "OK";
pub const OK_SUMMARY_MESSAGE: &str = "All configuration components reported OK.";

pub const ERROR_STATUS: &str = "Error";
pub const NOT_APPLICABLE: &str = "N/A";

pub const UNNAMED_CATEGORY: &str = "Unnamed Category";
pub const UNNAMED_SUB_COMPONENT: &str = "Unnamed SubComponent";
pub const NO_MESSAGE_PROVIDED: &str = "No message provided.";

/// What to do with a non-ok category that has no message and no reportable
/// sub-component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmessagedIssuePolicy {
    /// Emit a category row with [`NO_MESSAGE_PROVIDED`] so the account stays visible.
    #[default]
    Report,
    /// Emit nothing for it. The account still loses its OK summary row, so it
    /// may end up with no rows at all.
    Suppress,
}

/// Flatten a decoded status payload for one account.
///
/// A payload that is not a non-empty array yields the single "no data" row.
/// Sub-components are only read for categories that are not ok.
///
/// # Errors
///
/// Returns [`StatusFetchError::Unexpected`] when a category, or a
/// sub-component of a non-ok category, is not an object.
pub fn flatten_status(
    account: &Account,
    payload: &Value,
    policy: UnmessagedIssuePolicy,
) -> Result<Vec<ReportRow>, StatusFetchError> {
    let Some(items) = payload.as_array().filter(|items| !items.is_empty()) else {
        return Ok(vec![no_data_row(account)]);
    };

    let mut rows = Vec::new();
    let mut found_issue = false;

    for (index, item) in items.iter().enumerate() {
        let category = StatusComponent::parse(item).map_err(|e| {
            StatusFetchError::Unexpected(format!(
                "status component {} could not be read: {}",
                index, e
            ))
        })?;
        if category.is_ok() {
            continue;
        }
        found_issue = true;
        rows.extend(issue_rows(account, index, &category, policy)?);
    }

    if !found_issue {
        rows.push(ReportRow::for_account(
            account,
            OK_SUMMARY_CATEGORY,
            NOT_APPLICABLE,
            OK_SUMMARY_STATUS,
            OK_SUMMARY_MESSAGE,
        ));
    }

    Ok(rows)
}

/// Rows for one non-ok category: its own row, then its reportable sub-components.
fn issue_rows(
    account: &Account,
    index: usize,
    category: &StatusComponent,
    policy: UnmessagedIssuePolicy,
) -> Result<Vec<ReportRow>, StatusFetchError> {
    let category_name = category.name.as_deref().unwrap_or(UNNAMED_CATEGORY);
    let overall_context = format!("Overall {}", category_name);

    let mut sub_rows = Vec::new();
    for (sub_index, value) in category.sub_components.iter().enumerate() {
        let sub = StatusComponent::parse(value).map_err(|e| {
            StatusFetchError::Unexpected(format!(
                "sub-component {} of status component {} could not be read: {}",
                sub_index, index, e
            ))
        })?;
        if sub.is_ok() || sub.message().is_empty() {
            continue;
        }
        sub_rows.push(ReportRow::for_account(
            account,
            category_name,
            sub.name.as_deref().unwrap_or(UNNAMED_SUB_COMPONENT),
            sub.status(),
            sub.message(),
        ));
    }

    let category_message = if !category.message().is_empty() {
        Some(category.message())
    } else if sub_rows.is_empty() && policy == UnmessagedIssuePolicy::Report {
        Some(NO_MESSAGE_PROVIDED)
    } else {
        None
    };

    let mut rows = Vec::with_capacity(sub_rows.len() + 1);
    if let Some(message) = category_message {
        rows.push(ReportRow::for_account(
            account,
            category_name,
            overall_context.as_str(),
            category.status(),
            message,
        ));
    }
    rows.extend(sub_rows);
    Ok(rows)
}

/// The single row recorded for an account whose status could not be read.
pub fn error_row(account: &Account, err: &StatusFetchError) -> ReportRow {
    ReportRow::for_account(
        account,
        err.category(),
        NOT_APPLICABLE,
        ERROR_STATUS,
        err.to_string(),
    )
}

/// Map the outcome of one account's fetch to its report rows.
pub fn rows_for_outcome(
    account: &Account,
    outcome: Result<Value, StatusFetchError>,
    policy: UnmessagedIssuePolicy,
) -> Vec<ReportRow> {
    match outcome.and_then(|payload| flatten_status(account, &payload, policy)) {
        Ok(rows) => rows,
        Err(err) => vec![error_row(account, &err)],
    }
}

fn no_data_row(account: &Account) -> ReportRow {
    ReportRow::for_account(
        account,
        NO_DATA_CATEGORY,
        NOT_APPLICABLE,
        NO_DATA_STATUS,
        NO_DATA_MESSAGE,
    )
}
