/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for solmobile-wallet-adapter tests

use std::sync::Arc;

use solmobile_wallet_adapter::{
    AppIdentity, ClientConfig, Cluster, MockWalletDevice, SolmobileClient, WalletSession,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server for both auth and RPC traffic
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SolmobileClient {
    SolmobileClient::with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
    )
    .expect("client init")
}

/// Wallet session wired to a mock device on devnet
#[allow(dead_code)]
pub fn test_session(device: Arc<MockWalletDevice>) -> WalletSession {
    WalletSession::new(device, AppIdentity::default(), Cluster::Devnet)
}

/// Nonce endpoint response body
#[allow(dead_code)]
pub fn nonce_body(message: &str, nonce: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "message": message,
            "nonce": nonce,
            "expires_at": "2099-01-01T00:00:00Z"
        }
    })
}

/// Verify endpoint response body
#[allow(dead_code)]
pub fn credentials_body(access_token: &str, refresh_token: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "access_token": access_token,
            "refresh_token": refresh_token
        }
    })
}

/// Mount a successful nonce mock with an expected call count
#[allow(dead_code)]
pub async fn mount_nonce(server: &MockServer, message: &str, nonce: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/auth/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nonce_body(message, nonce)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mount a successful verify mock matching the given nonce
#[allow(dead_code)]
pub async fn mount_verify(
    server: &MockServer,
    nonce: &str,
    access_token: &str,
    refresh_token: &str,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .and(body_partial_json(serde_json::json!({ "nonce": nonce })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(credentials_body(access_token, refresh_token)),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}
