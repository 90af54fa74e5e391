//! Progress indicator for the per-account status pass.
//!
//! Responsibilities:
//! - Show which account is being checked out of how many.
//! - Ensure ALL progress output is written to STDERR (never stdout), so CSV
//!   written to stdout is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use prisma_client::Account;
use std::time::Duration;

/// A counted progress bar over the accounts being checked.
///
/// When disabled, it becomes a no-op.
pub(crate) struct AccountProgress {
    pb: Option<ProgressBar>,
}

impl AccountProgress {
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, total: usize) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("template is a compile-time constant with valid syntax")
                .progress_chars("=>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Record that account `index` (1-based) is about to be checked.
    pub(crate) fn start_account(&self, index: usize, account: &Account) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(index.saturating_sub(1) as u64);
        pb.set_message(format!("{} ({})", account.name, account.account_id));
    }

    /// Finish the bar with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        if let Some(len) = pb.length() {
            pb.set_position(len);
        }
        pb.finish_with_message("status checks done");
    }
}

impl Drop for AccountProgress {
    fn drop(&mut self) {
        // Clear an unfinished bar so it does not interleave with error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
