/*
[INPUT]:  Wallet identity, signatures, and server-issued nonces
[OUTPUT]: Challenges and session credentials from the auth service
[POS]:    HTTP layer - challenge-response authentication endpoints
[UPDATE]: When auth endpoints or wire shapes change
*/

use reqwest::Method;

use crate::http::{Result, SolmobileClient};
use crate::types::{Challenge, Credentials, Identity, NonceRequest, NonceResponse, VerifyRequest, VerifyResponse};

impl SolmobileClient {
    /// Request an authentication nonce for a wallet.
    ///
    /// POST /auth/nonce
    ///
    /// No retry built in; the caller decides. The returned expiry is
    /// informational, the server remains the authority on nonce validity.
    pub async fn request_nonce(&self, identity: &Identity) -> Result<Challenge> {
        let body = NonceRequest {
            wallet: identity.to_base58(),
        };

        let builder = self.auth_request(Method::POST, "/auth/nonce")?.json(&body);
        let envelope: NonceResponse = self.send_json(builder).await?;
        Ok(envelope.data)
    }

    /// Submit a signed nonce for verification, receiving session credentials.
    ///
    /// POST /auth/verify
    pub async fn verify_signature(
        &self,
        identity: &Identity,
        signature_base58: &str,
        nonce: &str,
    ) -> Result<Credentials> {
        let body = VerifyRequest {
            wallet: identity.to_base58(),
            signature: signature_base58.to_string(),
            nonce: nonce.to_string(),
        };

        let builder = self.auth_request(Method::POST, "/auth/verify")?.json(&body);
        let envelope: VerifyResponse = self.send_json(builder).await?;
        Ok(envelope.data)
    }
}
