//! Per-account configuration status endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{ACCEPT_JSON, AUTH_HEADER, read_json, send_request};
use crate::error::Result;

/// Fetch the raw configuration status payload for one account.
///
/// The payload is returned undecoded beyond JSON so that shape problems can
/// be reported per account instead of failing the call.
pub async fn get_config_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    account_id: &str,
    timeout: Duration,
) -> Result<serde_json::Value> {
    let url = format!(
        "{}/account/{}/config/status",
        base_url,
        encode_path_segment(account_id)
    );

    let builder = client
        .get(&url)
        .header(AUTH_HEADER, auth_token)
        .header(reqwest::header::ACCEPT, ACCEPT_JSON)
        .timeout(timeout);
    let response = send_request(builder).await?;
    read_json(response).await
}
