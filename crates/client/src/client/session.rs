//! Login.

use tracing::{info, warn};

use crate::auth::Session;
use crate::client::PrismaClient;
use crate::endpoints;
use crate::error::Result;
use prisma_config::Credentials;

impl PrismaClient {
    /// Log in once and return the session used by every later call.
    ///
    /// There is no retry: a failed login must stop the run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::AuthFailed`] when no token comes back,
    /// and transport or API errors as they occur.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        info!("Attempting login to {}/login", self.base_url);

        match endpoints::login(&self.http, &self.base_url, credentials, self.login_timeout).await
        {
            Ok(token) => {
                info!("Login successful");
                Ok(Session::new(token))
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                Err(e)
            }
        }
    }
}
