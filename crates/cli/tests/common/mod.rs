//! Shared test utilities for prisma-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the login and account listing mocks most tests need.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Credentials are set to dummy values; the base URL is left to the test.

use assert_cmd::Command;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `prisma-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Dummy access and secret keys satisfy config validation.
/// - Other PRISMA_* variables are cleared to avoid leakage from the host.
/// - The call delay is zero so tests do not sleep.
pub fn prisma_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("prisma-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("PRISMA_ACCESS_KEY", "test-access-key")
        .env("PRISMA_SECRET_KEY", "test-secret-key")
        .env("PRISMA_CALL_DELAY_MS", "0");

    cmd.env_remove("PRISMA_API_URL")
        .env_remove("PRISMA_LOGIN_TIMEOUT")
        .env_remove("PRISMA_LIST_TIMEOUT")
        .env_remove("PRISMA_STATUS_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `prisma-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn prisma_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = prisma_cmd();
    cmd.env("PRISMA_API_URL", base_url);
    cmd
}

/// Mount a successful `POST /login`.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "cli-token"})))
        .mount(server)
        .await;
}

/// Mount `GET /cloud` returning `accounts`.
#[allow(dead_code)]
pub async fn mount_accounts(server: &MockServer, accounts: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/cloud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts))
        .mount(server)
        .await;
}

/// Mount the status endpoint for one account.
#[allow(dead_code)]
pub async fn mount_status(server: &MockServer, account_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/account/{}/config/status", account_id)))
        .respond_with(response)
        .mount(server)
        .await;
}
