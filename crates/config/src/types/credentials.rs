//! API credential types.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{PLACEHOLDER_ACCESS_KEY, PLACEHOLDER_SECRET_KEY};

/// Access key / secret key pair exchanged for a session token at login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: SecretString,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::new(secret_key.into().into()),
        }
    }

    /// Returns true if either half still carries the sample placeholder value.
    pub fn is_placeholder(&self) -> bool {
        self.access_key == PLACEHOLDER_ACCESS_KEY
            || self.secret_key.expose_secret() == PLACEHOLDER_SECRET_KEY
    }
}
