//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell failure stages apart.
//! - Classify the stage a fatal error happened in.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Per-account status failures are report rows, never exit codes.

use std::path::PathBuf;

use prisma_client::ClientError;
use prisma_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for prisma-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed, including runs with nothing to process.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Login was rejected or returned no token.
    AuthenticationFailed = 2,

    /// Network, DNS, or timeout failure while logging in or listing accounts.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// The cloud account list could not be retrieved or read.
    EnumerationFailed = 4,

    /// Missing or placeholder credentials, bad URL, or bad numeric setting.
    ///
    /// Scripts should fix the configuration and not retry as-is.
    InvalidConfig = 5,

    /// The report could not be written.
    WriteFailed = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// A fatal failure tagged with the stage it happened in.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Login failed")]
    Login(#[source] ClientError),

    #[error("Failed to list cloud accounts")]
    Enumerate(#[source] ClientError),

    #[error("Failed to write report to {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::Login(e) | CommandError::Enumerate(e) if e.is_connection_error() => {
                ExitCode::ConnectionError
            }
            CommandError::Login(_) => ExitCode::AuthenticationFailed,
            CommandError::Enumerate(_) => ExitCode::EnumerationFailed,
            CommandError::WriteReport { .. } => ExitCode::WriteFailed,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(command_err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(command_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::InvalidConfig;
            }
        }

        ExitCode::GeneralError
    }
}
