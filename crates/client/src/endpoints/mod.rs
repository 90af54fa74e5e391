//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP call with no retry. Callers
//! pass the shared `reqwest::Client`, the normalized base URL and, for
//! authenticated calls, the session token.

mod accounts;
mod auth;
mod request;
mod status;
pub mod url_encoding;

pub use accounts::list_accounts;
pub use auth::login;
pub use request::{ACCEPT_JSON, AUTH_HEADER, read_json, send_request};
pub use status::get_config_status;
