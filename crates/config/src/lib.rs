//! Configuration for the Prisma Cloud config-status reporter.
//!
//! This crate provides the connection and credential types plus a loader
//! that merges built-in defaults, `.env` files, environment variables and
//! explicit overrides into a validated [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig, Credentials};
