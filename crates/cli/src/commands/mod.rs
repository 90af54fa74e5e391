//! Command implementations.

mod accounts;
mod report;
mod status;

use anyhow::Result;
use prisma_client::{PrismaClient, Session};
use prisma_config::Config;
use tracing::info;

use crate::args::{Cli, Commands};
use crate::error::CommandError;

/// Run the parsed command against a validated configuration.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Report {
            output_file,
            suppress_unmessaged_issues,
        } => {
            report::run(
                &config,
                report::ReportArgs {
                    output_file,
                    suppress_unmessaged_issues,
                    quiet: cli.quiet,
                },
            )
            .await
        }
        Commands::Accounts => accounts::run(&config).await,
        Commands::Status { account_id } => status::run(&config, &account_id).await,
    }
}

/// Build a client from config and log in once.
pub(crate) async fn connect(config: &Config) -> Result<(PrismaClient, Session)> {
    let client = PrismaClient::builder().from_config(config).build()?;

    info!("Connecting to {}", client.base_url());
    let session = client
        .login(&config.credentials)
        .await
        .map_err(CommandError::Login)?;

    Ok((client, session))
}
