//! Error types for the Prisma Cloud client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Maximum number of response body characters kept in error messages.
pub const RESPONSE_SNIPPET_CHARS: usize = 200;

/// Errors that can occur during Prisma Cloud client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login did not yield a usable token.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the API.
    #[error("API error ({status}) at {url}: {body}")]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body was not valid JSON.
    #[error("Invalid JSON response from server: {snippet}")]
    MalformedResponse { snippet: String },

    /// Response was JSON but not in the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates a connection or timeout problem.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}

/// Why a single account's status could not be turned into report rows.
///
/// Each variant maps to exactly one error row; see [`crate::flatten::error_row`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusFetchError {
    #[error("HTTP Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request Error: {0}")]
    Transport(String),

    #[error("Invalid JSON response from server: {snippet}...")]
    MalformedResponse { snippet: String },

    #[error("Unexpected script error: {0}")]
    Unexpected(String),
}

impl StatusFetchError {
    /// Report category for the error row.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Http { .. } | Self::Transport(_) | Self::MalformedResponse { .. } => "API Error",
            Self::Unexpected(_) => "Script Error",
        }
    }
}

impl From<ClientError> for StatusFetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, body, .. } => Self::Http { status, body },
            ClientError::HttpError(e) => Self::Transport(e.to_string()),
            ClientError::MalformedResponse { snippet } => Self::MalformedResponse { snippet },
            other => Self::Unexpected(other.to_string()),
        }
    }
}

/// Truncate a response body to [`RESPONSE_SNIPPET_CHARS`] characters.
pub fn snippet(body: &str) -> String {
    body.chars().take(RESPONSE_SNIPPET_CHARS).collect()
}
