//! Paced collection of config-status report rows across accounts.
//!
//! # Invariants
//! - Accounts are processed strictly in the given order, one call at a time.
//! - A failed account contributes exactly one error row; the batch continues.
//! - The configured delay elapses between consecutive status calls.

use std::time::Duration;

use tracing::{info, warn};

use crate::auth::Session;
use crate::client::PrismaClient;
use crate::flatten::{UnmessagedIssuePolicy, rows_for_outcome};
use crate::models::{Account, ReportRow};

/// Called before each account is fetched with `(index, total, account)`,
/// where `index` starts at 1.
pub type ProgressCallback<'a> = &'a mut (dyn FnMut(usize, usize, &Account) + Send);

/// Options for [`PrismaClient::collect_config_status`].
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    /// Pause between consecutive status calls.
    pub call_delay: Duration,
    pub policy: UnmessagedIssuePolicy,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            call_delay: Duration::from_millis(prisma_config::constants::DEFAULT_CALL_DELAY_MS),
            policy: UnmessagedIssuePolicy::default(),
        }
    }
}

impl PrismaClient {
    /// Fetch and flatten the status of a single account.
    pub async fn account_report(
        &self,
        session: &Session,
        account: &Account,
        policy: UnmessagedIssuePolicy,
    ) -> Vec<ReportRow> {
        let outcome = self
            .fetch_config_status(session, &account.account_id)
            .await
            .inspect_err(|e| {
                warn!(
                    account_id = %account.account_id,
                    error = %e,
                    "Failed to get config status"
                );
            });
        rows_for_outcome(account, outcome, policy)
    }

    /// Fetch and flatten every account's status, in order.
    ///
    /// Never fails: per-account problems become error rows.
    pub async fn collect_config_status(
        &self,
        session: &Session,
        accounts: &[Account],
        options: CollectOptions,
        mut progress_cb: Option<ProgressCallback<'_>>,
    ) -> Vec<ReportRow> {
        let total = accounts.len();
        let mut rows = Vec::new();

        for (index, account) in accounts.iter().enumerate() {
            let number = index + 1;
            if let Some(cb) = progress_cb.as_mut() {
                cb(number, total, account);
            }
            info!(
                "Fetching config status for account {} of {} (ID: {})",
                number, total, account.account_id
            );

            let account_rows = self.account_report(session, account, options.policy).await;
            if account_rows.is_empty() {
                warn!(
                    account_id = %account.account_id,
                    "Account reported an issue without any message; no row emitted"
                );
            }
            rows.extend(account_rows);

            if number < total && !options.call_delay.is_zero() {
                tokio::time::sleep(options.call_delay).await;
            }
        }

        rows
    }
}
