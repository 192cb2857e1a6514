//! Integration tests for the 401 refresh-and-retry cycle.

use mira_client::{ApiClient, ClientConfig, ClientError};
use mira_core::{LedgerAccount, TokenPair};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Matches requests carrying no Authorization header at all.
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn balance_body() -> serde_json::Value {
    json!([{
        "id": "0b9e2f66-61a0-4f5c-9b63-111111111111",
        "user_id": "0b9e2f66-61a0-4f5c-9b63-222222222222",
        "currency": "USDT",
        "type": "TRADING",
        "balance": "1250.75",
        "is_active": true,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-06-01T00:00:00Z"
    }])
}

fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::with_base_url(server.uri())).expect("client builds")
}

#[tokio::test]
async fn expired_access_token_triggers_one_refresh_and_one_retry() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    client
        .tokens()
        .set_tokens(TokenPair::new("expired", "r1"))
        .unwrap();

    // Original attempt with the stale token is rejected.
    Mock::given(method("GET"))
        .and(path("/api/v1/wallet/balance"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "r2")))
        .expect(1)
        .mount(&server)
        .await;

    // Retry must carry the newly issued access token.
    Mock::given(method("GET"))
        .and(path("/api/v1/wallet/balance"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body()))
        .expect(1)
        .mount(&server)
        .await;

    let accounts: Vec<LedgerAccount> = client.wallet_balance().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].currency, "USDT");

    // Both tokens replaced atomically.
    assert_eq!(client.tokens().access_token().as_deref(), Some("fresh"));
    assert_eq!(client.tokens().refresh_token().as_deref(), Some("r2"));
}

#[tokio::test]
async fn failed_refresh_clears_tokens_and_stops() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    client
        .tokens()
        .set_tokens(TokenPair::new("expired", "bad-refresh"))
        .unwrap();

    // One original attempt, zero retries.
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "INVALID_REFRESH_TOKEN",
            "message": "Refresh token revoked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired));
    assert!(!client.tokens().has_tokens());
}

#[tokio::test]
async fn no_tokens_sends_bare_request_then_expires_session() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    // With no stored token the request still goes out, without an
    // Authorization header; refresh cannot be attempted afterwards.
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("x", "y")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired));
}

#[tokio::test]
async fn second_401_after_refresh_is_terminal() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    client
        .tokens()
        .set_tokens(TokenPair::new("expired", "r1"))
        .unwrap();

    // Server rejects both the original and the retried request.
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "TOKEN_REVOKED",
            "message": "Access revoked"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "r2")))
        .expect(1)
        .mount(&server)
        .await;

    // The retry's 401 surfaces as an API error, not a second refresh.
    let err = client.me().await.unwrap_err();
    match err {
        ClientError::Api { code, status, .. } => {
            assert_eq!(code, "TOKEN_REVOKED");
            assert_eq!(status, 401);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_401s_coalesce_into_one_refresh() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    client
        .tokens()
        .set_tokens(TokenPair::new("expired", "r1"))
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/wallet/balance"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/wallet/balance"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body()))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "r2")))
        .expect(1)
        .mount(&server)
        .await;

    let (a, b) = tokio::join!(client.wallet_balance(), client.wallet_balance());
    assert!(a.is_ok(), "first concurrent call failed: {a:?}");
    assert!(b.is_ok(), "second concurrent call failed: {b:?}");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Nothing listens on this port.
    let client = ApiClient::new(ClientConfig::with_base_url("http://127.0.0.1:1")).unwrap();
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.status(), 0);
}
