//! Cloud account listing endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{ACCEPT_JSON, AUTH_HEADER, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::Account;
use crate::models::account::{CloudAccountEntry, project_accounts};

/// List every cloud account visible to the session.
///
/// Entries without an account id are dropped; missing names and cloud types
/// become `"N/A"`.
pub async fn list_accounts(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
) -> Result<Vec<Account>> {
    let url = format!("{}/cloud", base_url);
    debug!("Fetching cloud accounts from {}", url);

    let builder = client
        .get(&url)
        .header(AUTH_HEADER, auth_token)
        .header(reqwest::header::ACCEPT, ACCEPT_JSON)
        .timeout(timeout);
    let response = send_request(builder).await?;
    let body = read_json(response).await?;

    let entries: Vec<CloudAccountEntry> = serde_json::from_value(body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse cloud account list: {}", e))
    })?;
    let total = entries.len();
    let accounts = project_accounts(entries);

    debug!(
        listed = total,
        with_ids = accounts.len(),
        "Projected cloud account listing"
    );
    Ok(accounts)
}
