//! Shared request execution and response decoding.
//!
//! Invariants:
//! - Non-2xx responses always become `ClientError::ApiError` with the body text.
//! - Bodies that are not JSON become `ClientError::MalformedResponse` carrying
//!   a bounded snippet, never the full body.

use reqwest::{RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::{ClientError, Result, snippet};

/// Header carrying the session token on authenticated calls.
pub const AUTH_HEADER: &str = "x-redlock-auth";

/// Accept header value sent with every call.
pub const ACCEPT_JSON: &str = "application/json; charset=UTF-8";

/// Send a request once and fail on any non-success status.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        debug!(status = status.as_u16(), url = %response.url(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "No response body".to_string());

    warn!(
        status = status.as_u16(),
        url = %url,
        body = %snippet(&body),
        "Request returned an error status"
    );

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Read the response body and decode it as JSON.
pub async fn read_json(response: Response) -> Result<serde_json::Value> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        debug!(error = %e, "Response body is not valid JSON");
        ClientError::MalformedResponse {
            snippet: snippet(&body),
        }
    })
}
