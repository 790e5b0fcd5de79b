/*
[INPUT]:  Mock authentication service responses
[OUTPUT]: Test results for wire-level request/response handling
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When endpoints or wire shapes change
*/

mod common;

use common::{setup_mock_server, test_client};
use rstest::rstest;
use solmobile_wallet_adapter::{Identity, SolmobileError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn test_identity() -> Identity {
    Identity::from_bytes(&[7u8; 32]).unwrap()
}

#[rstest]
#[case::iso8601(serde_json::json!("2099-01-01T00:00:00Z"))]
#[case::epoch_millis(serde_json::json!(4_070_908_800_000i64))]
#[tokio::test]
async fn test_nonce_expiry_formats(#[case] expires_at: serde_json::Value) {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "message": "Sign in: nonce abc123",
                "nonce": "abc123",
                "expires_at": expires_at
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let challenge = client.request_nonce(&test_identity()).await.unwrap();

    // Both wire formats resolve to the same instant
    assert_eq!(challenge.expires_at.timestamp_millis(), 4_070_908_800_000);
}

#[tokio::test]
async fn test_verify_minimal_credentials() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "access_token": "AT1", "refresh_token": "RT1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let credentials = client
        .verify_signature(&test_identity(), "sig58", "abc123")
        .await
        .unwrap();

    assert_eq!(credentials.access_token, "AT1");
    assert!(credentials.api_key.is_none());
    assert!(credentials.user.is_none());
}

#[tokio::test]
async fn test_verify_rejection_carries_status_context() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_string("signature mismatch"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .verify_signature(&test_identity(), "sig58", "abc123")
        .await
        .unwrap_err();

    // Semantic rejection, not transient
    assert!(!err.is_retryable());

    match err {
        SolmobileError::ServerRejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "signature mismatch");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_balance_and_activity_reads() {
    let server = setup_mock_server().await;
    let identity = test_identity();

    Mock::given(method("POST"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "method": "getBalance"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "context": { "slot": 5 }, "value": 1_500_000_000u64 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "method": "getSignaturesForAddress"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [
                { "signature": "5abc", "slot": 123, "blockTime": 1_700_000_000i64, "err": null }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let lamports = client.get_balance(&identity).await.unwrap();
    assert_eq!(lamports, 1_500_000_000);
    assert_eq!(solmobile_wallet_adapter::lamports_to_sol(lamports), 1.5);

    let signatures = client.get_recent_signatures(&identity, 10).await.unwrap();
    assert_eq!(signatures.len(), 1);
    assert_eq!(signatures[0].signature, "5abc");
}
