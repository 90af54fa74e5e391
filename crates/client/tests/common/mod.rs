//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup beyond login (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use prisma_client::testing::{load_fixture, sample_accounts};

#[allow(unused_imports)]
pub use prisma_client::endpoints;
#[allow(unused_imports)]
pub use prisma_client::{Credentials, PrismaClient, Session};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path};

/// Token returned by `fixtures/auth/login_success.json`.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-jwt-token-abc123";

/// Short timeout so failing tests do not hang.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("test-access-key", "test-secret-key")
}

/// Build a client pointed at the mock server with short timeouts.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> PrismaClient {
    PrismaClient::builder()
        .base_url(server.uri())
        .login_timeout(TEST_TIMEOUT)
        .list_timeout(TEST_TIMEOUT)
        .status_timeout(TEST_TIMEOUT)
        .build()
        .expect("client should build")
}

/// Mount a successful login and return a logged-in session.
#[allow(dead_code)]
pub async fn logged_in(server: &MockServer, client: &PrismaClient) -> Session {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .mount(server)
        .await;

    client
        .login(&test_credentials())
        .await
        .expect("login should succeed")
}
