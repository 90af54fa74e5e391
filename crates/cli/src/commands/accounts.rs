//! Accounts command implementation.

use anyhow::Result;
use prisma_config::Config;

use crate::error::CommandError;
use crate::output::render_csv;

const ACCOUNT_HEADERS: [&str; 3] = ["AccountID", "AccountName", "CloudType"];

pub async fn run(config: &Config) -> Result<()> {
    let (client, session) = super::connect(config).await?;

    let accounts = client
        .list_accounts(&session)
        .await
        .map_err(CommandError::Enumerate)?;

    print!("{}", render_csv(&ACCOUNT_HEADERS, &accounts)?);
    Ok(())
}
