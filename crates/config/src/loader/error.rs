//! Error types for configuration loading.
//!
//! Invariants:
//! - Error variants name the offending variable but never echo secret values.
//! - Dotenv errors never include raw `.env` line contents.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required. Set PRISMA_API_URL or pass --base-url.")]
    MissingBaseUrl,

    #[error("Access key is required. Set PRISMA_ACCESS_KEY or pass --access-key.")]
    MissingAccessKey,

    #[error("Secret key is required. Set PRISMA_SECRET_KEY or pass --secret-key.")]
    MissingSecretKey,

    #[error(
        "Credentials still carry the sample placeholder values. Provide your actual access key and secret key."
    )]
    PlaceholderCredentials,

    #[error("invalid timeout for {var}: {message}")]
    InvalidTimeout { var: String, message: String },

    #[error("invalid call delay: {message}")]
    InvalidCallDelay { message: String },

    /// SAFETY: only the byte index of the parse failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
