//! Authentication endpoint.

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

use crate::endpoints::{ACCEPT_JSON, read_json, send_request};
use crate::error::{ClientError, Result};
use prisma_config::Credentials;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Exchange an access key / secret key pair for a session token.
///
/// # Errors
///
/// Returns [`ClientError::AuthFailed`] when the call succeeds but the body
/// carries no non-empty `token`, and the usual transport/API errors otherwise.
pub async fn login(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    timeout: Duration,
) -> Result<String> {
    let url = format!("{}/login", base_url);
    debug!("Logging in to {} with access key {}", url, credentials.access_key);

    let builder = client
        .post(&url)
        .header(reqwest::header::ACCEPT, ACCEPT_JSON)
        .json(&LoginRequest {
            username: &credentials.access_key,
            password: credentials.secret_key.expose_secret(),
        })
        .timeout(timeout);
    let response = send_request(builder).await?;
    let body = read_json(response).await?;

    body.get("token")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ClientError::AuthFailed("login succeeded but no token was received".to_string())
        })
}
