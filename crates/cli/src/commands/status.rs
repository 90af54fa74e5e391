//! Single-account status command implementation.

use anyhow::Result;
use prisma_client::{Account, REPORT_HEADERS, UnmessagedIssuePolicy};
use prisma_config::Config;

use crate::output::render_csv;

/// Stand-in for fields only the account listing knows.
const UNKNOWN_FIELD: &str = "N/A";

pub async fn run(config: &Config, account_id: &str) -> Result<()> {
    let (client, session) = super::connect(config).await?;

    let account = Account::new(account_id, UNKNOWN_FIELD, UNKNOWN_FIELD);
    let rows = client
        .account_report(&session, &account, UnmessagedIssuePolicy::Report)
        .await;

    print!("{}", render_csv(&REPORT_HEADERS, &rows)?);
    Ok(())
}
