//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the connection settings (base URL, per-call timeouts, call delay).
//! - Define the API credential pair used to log in.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Any network activity (see client crate).
//!
//! Invariants:
//! - The secret key is always held as `secrecy::SecretString`.

mod connection;
mod credentials;

pub use connection::{Config, ConnectionConfig};
pub use credentials::Credentials;
