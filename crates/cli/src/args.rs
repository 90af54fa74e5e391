//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global flags into a `ConfigLoader` layered over the environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use prisma_config::constants::DEFAULT_REPORT_FILE;
use prisma_config::{ConfigError, ConfigLoader};

#[derive(Parser)]
#[command(name = "prisma-cli")]
#[command(
    about = "Report the configuration status of every Prisma Cloud account",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  prisma-cli report\n  prisma-cli report --output-file reports/status.csv\n  prisma-cli --quiet report --output-file - > status.csv\n  prisma-cli accounts\n  prisma-cli status 123456789012\n"
)]
pub struct Cli {
    /// Base URL of the Prisma Cloud API (e.g., https://api2.prismacloud.io)
    #[arg(long, global = true, env = "PRISMA_API_URL")]
    pub base_url: Option<String>,

    /// Access key ID used as the login username
    #[arg(long, global = true, env = "PRISMA_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Secret key used as the login password
    #[arg(long, global = true, env = "PRISMA_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Pause between per-account status calls, in milliseconds (0 disables)
    #[arg(long, global = true, env = "PRISMA_CALL_DELAY_MS", value_name = "MS")]
    pub call_delay_ms: Option<u64>,

    /// Suppress the progress bar.
    ///
    /// Note: Progress always writes to STDERR; this flag disables it entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in, check every account, and write the CSV report
    Report {
        /// Report path, or `-` for stdout
        #[arg(long, value_name = "FILE", default_value = DEFAULT_REPORT_FILE)]
        output_file: PathBuf,

        /// Drop non-ok categories that carry no message instead of reporting them
        #[arg(long)]
        suppress_unmessaged_issues: bool,
    },

    /// List the cloud accounts that would be checked, as CSV on stdout
    Accounts,

    /// Check a single account by id and print its rows as CSV on stdout
    Status {
        /// Cloud account id
        account_id: String,
    },
}

impl Cli {
    /// Layer the global flags over environment configuration.
    ///
    /// Blank flag values are ignored so they fall back to the environment.
    pub fn config_loader(&self) -> Result<ConfigLoader, ConfigError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(url) = non_blank(&self.base_url) {
            loader = loader.with_base_url(url);
        }
        if let Some(access_key) = non_blank(&self.access_key) {
            loader = loader.with_access_key(access_key);
        }
        if let Some(secret_key) = non_blank(&self.secret_key) {
            loader = loader.with_secret_key(secret_key);
        }
        if let Some(delay_ms) = self.call_delay_ms {
            loader = loader.with_call_delay(Duration::from_millis(delay_ms));
        }

        Ok(loader)
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
