//! Authenticated session handle.

use secrecy::{ExposeSecret, SecretString};

/// Bearer token obtained from `POST /login`.
///
/// Created once per run by [`crate::PrismaClient::login`] and borrowed by
/// every later call. The token never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct Session {
    token: SecretString,
}

impl Session {
    pub(crate) fn new(token: String) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Raw token value for the `x-redlock-auth` header.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}
