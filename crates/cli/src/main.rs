//! Prisma CLI - configuration status reports for Prisma Cloud accounts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a validated configuration and run the selected command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API calls or status flattening (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Stdout carries command output only; logs and progress go to stderr.

mod args;
mod commands;
mod error;
mod output;
mod progress;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use prisma_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::InvalidConfig.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures.
            let code = if e.use_stderr() {
                ExitCode::InvalidConfig
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.config_loader().and_then(ConfigLoader::build) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::InvalidConfig.as_i32());
        }
    };

    let exit_code = match commands::run(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
