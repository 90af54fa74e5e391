//! Cloud account enumeration.

use tracing::info;

use crate::auth::Session;
use crate::client::PrismaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Account;

impl PrismaClient {
    /// List all cloud accounts that have an account id.
    pub async fn list_accounts(&self, session: &Session) -> Result<Vec<Account>> {
        let accounts = endpoints::list_accounts(
            &self.http,
            &self.base_url,
            session.token(),
            self.list_timeout,
        )
        .await?;

        info!(
            "Successfully retrieved {} cloud accounts with IDs",
            accounts.len()
        );
        Ok(accounts)
    }
}
