//! Login endpoint tests.
//!
//! # Invariants
//! - The token is read from the top-level `token` field
//! - A 2xx response without a token is an authentication failure
//! - Non-2xx responses return ApiError with the status code

mod common;

use common::*;
use prisma_client::ClientError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "test-access-key",
            "password": "test-secret-key"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = endpoints::login(
        &Client::new(),
        &mock_server.uri(),
        &test_credentials(),
        TEST_TIMEOUT,
    )
    .await
    .unwrap();

    assert_eq!(token, TEST_TOKEN);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&mock_server)
        .await;

    let err = endpoints::login(
        &Client::new(),
        &mock_server.uri(),
        &test_credentials(),
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(!err.is_connection_error());
    match err {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid credentials");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_without_token_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_no_token.json")),
        )
        .mount(&mock_server)
        .await;

    let err = endpoints::login(
        &Client::new(),
        &mock_server.uri(),
        &test_credentials(),
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_login_empty_token_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": ""})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.login(&test_credentials()).await.unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_login_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.login(&test_credentials()).await.unwrap_err();

    match err {
        ClientError::MalformedResponse { snippet } => {
            assert_eq!(snippet, "<html>maintenance</html>");
        }
        other => panic!("Expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_connection_refused_is_connection_error() {
    // Bind then drop a server so the port is very likely closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = PrismaClient::builder()
        .base_url(uri)
        .login_timeout(TEST_TIMEOUT)
        .build()
        .unwrap();
    let err = client.login(&test_credentials()).await.unwrap_err();

    assert!(err.is_connection_error(), "got {:?}", err);
}

#[tokio::test]
async fn test_session_token_sent_on_later_calls() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    let session = logged_in(&mock_server, &client).await;

    Mock::given(method("GET"))
        .and(path("/cloud"))
        .and(header("x-redlock-auth", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let accounts = client.list_accounts(&session).await.unwrap();
    assert!(accounts.is_empty());
}
