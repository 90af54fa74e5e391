//! Per-account configuration status.

use crate::auth::Session;
use crate::client::PrismaClient;
use crate::endpoints;
use crate::error::StatusFetchError;

impl PrismaClient {
    /// Fetch one account's raw status payload.
    ///
    /// Failures come back already classified for the report's error row.
    pub async fn fetch_config_status(
        &self,
        session: &Session,
        account_id: &str,
    ) -> std::result::Result<serde_json::Value, StatusFetchError> {
        endpoints::get_config_status(
            &self.http,
            &self.base_url,
            session.token(),
            account_id,
            self.status_timeout,
        )
        .await
        .map_err(StatusFetchError::from)
    }
}
