//! Report command implementation.

use std::path::PathBuf;

use anyhow::Result;
use prisma_client::{Account, CollectOptions, REPORT_HEADERS, UnmessagedIssuePolicy};
use prisma_config::Config;
use tracing::info;

use crate::error::CommandError;
use crate::output::{render_csv, write_output};
use crate::progress::AccountProgress;

pub struct ReportArgs {
    pub output_file: PathBuf,
    pub suppress_unmessaged_issues: bool,
    pub quiet: bool,
}

pub async fn run(config: &Config, args: ReportArgs) -> Result<()> {
    let (client, session) = super::connect(config).await?;

    let accounts = client
        .list_accounts(&session)
        .await
        .map_err(CommandError::Enumerate)?;

    if accounts.is_empty() {
        eprintln!("No cloud accounts found to process.");
        return Ok(());
    }

    let policy = if args.suppress_unmessaged_issues {
        UnmessagedIssuePolicy::Suppress
    } else {
        UnmessagedIssuePolicy::Report
    };
    let options = CollectOptions {
        call_delay: config.connection.call_delay,
        policy,
    };

    let progress = AccountProgress::new(!args.quiet, accounts.len());
    let mut on_account = |index: usize, _total: usize, account: &Account| {
        progress.start_account(index, account);
    };
    let rows = client
        .collect_config_status(&session, &accounts, options, Some(&mut on_account))
        .await;
    progress.finish();

    if rows.is_empty() {
        eprintln!("No report data generated.");
        return Ok(());
    }

    let content = render_csv(&REPORT_HEADERS, &rows)?;
    write_output(&content, &args.output_file).map_err(|source| CommandError::WriteReport {
        path: args.output_file.clone(),
        source,
    })?;

    info!(
        rows = rows.len(),
        accounts = accounts.len(),
        "Report written"
    );
    eprintln!(
        "Report written to {} ({} rows for {} accounts)",
        args.output_file.display(),
        rows.len(),
        accounts.len()
    );

    Ok(())
}
