/*
[INPUT]:  Wallet identity and cluster RPC endpoint
[OUTPUT]: Balance in lamports and recent transaction signatures
[POS]:    HTTP layer - funds/activity read endpoints (display inputs only)
[UPDATE]: When adding new read endpoints or changing RPC shapes
*/

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::http::{Result, SolmobileClient, SolmobileError};
use crate::types::{Identity, RpcBalance, RpcResponse, SignatureInfo};

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to SOL for display
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

impl SolmobileClient {
    /// Current balance in lamports.
    ///
    /// JSON-RPC `getBalance`.
    pub async fn get_balance(&self, identity: &Identity) -> Result<u64> {
        let balance: RpcBalance = self
            .rpc_call("getBalance", json!([identity.to_base58()]))
            .await?;
        Ok(balance.value)
    }

    /// Most recent confirmed transaction signatures for the wallet.
    ///
    /// JSON-RPC `getSignaturesForAddress`.
    pub async fn get_recent_signatures(
        &self,
        identity: &Identity,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>> {
        self.rpc_call(
            "getSignaturesForAddress",
            json!([identity.to_base58(), { "limit": limit }]),
        )
        .await
    }

    async fn rpc_call<T: DeserializeOwned>(
        &self,
        rpc_method: &str,
        params: serde_json::Value,
    ) -> Result<T> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": rpc_method,
            "params": params,
        });

        let builder = self.rpc_request().json(&body);
        let response: RpcResponse<T> = self.send_json(builder).await?;

        if let Some(error) = response.error {
            return Err(SolmobileError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or_else(|| {
            SolmobileError::InvalidResponse(format!("RPC response for {rpc_method} missing result"))
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::ClientConfig;

    fn test_identity() -> Identity {
        Identity::from_bytes(&[9u8; 32]).unwrap()
    }

    async fn test_client(server: &MockServer) -> SolmobileClient {
        SolmobileClient::with_config_and_base_urls(
            ClientConfig::default(),
            &server.uri(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(lamports_to_sol(2_500_000_000), 2.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[tokio::test]
    async fn test_get_balance() {
        let server = MockServer::start().await;
        let identity = test_identity();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "method": "getBalance",
                "params": [identity.to_base58()],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "context": { "slot": 100 }, "value": 2_500_000_000u64 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let lamports = client.get_balance(&identity).await.unwrap();
        assert_eq!(lamports, 2_500_000_000);
    }

    #[tokio::test]
    async fn test_get_recent_signatures() {
        let server = MockServer::start().await;
        let identity = test_identity();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "method": "getSignaturesForAddress",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": [
                    { "signature": "5abc", "slot": 123, "blockTime": 1700000000, "err": null },
                    { "signature": "6def", "slot": 124, "blockTime": null, "err": { "InstructionError": [0, "Custom"] } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let signatures = client.get_recent_signatures(&identity, 10).await.unwrap();

        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0].signature, "5abc");
        assert_eq!(signatures[0].block_time, Some(1_700_000_000));
        assert!(signatures[1].block_time.is_none());
        assert!(signatures[1].err.is_some());
    }

    #[tokio::test]
    async fn test_rpc_error_surfaces() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32602, "message": "Invalid param: WrongSize" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.get_balance(&test_identity()).await.unwrap_err();

        match err {
            SolmobileError::Rpc { code, message } => {
                assert_eq!(code, -32602);
                assert!(message.contains("Invalid param"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
