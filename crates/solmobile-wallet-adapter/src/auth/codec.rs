/*
[INPUT]:  Raw signature/public-key bytes or base58 text
[OUTPUT]: Base58 text or decoded bytes with typed length checks
[POS]:    Auth layer - signature and key encoding
[UPDATE]: When changing the text encoding or key/signature formats
*/

use crate::http::{Result, SolmobileError};
use crate::types::{PUBLIC_KEY_LEN, SIGNATURE_LEN};

/// Encode bytes as base58 text. Total function, no failure mode.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode base58 text back to bytes.
///
/// Fails with `MalformedEncoding` when the input contains characters
/// outside the base58 alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| SolmobileError::MalformedEncoding(e.to_string()))
}

/// Decode a base58 signature, enforcing the 64-byte scheme length
pub fn decode_signature(text: &str) -> Result<[u8; SIGNATURE_LEN]> {
    let bytes = decode(text)?;
    bytes.as_slice().try_into().map_err(|_| {
        SolmobileError::MalformedEncoding(format!(
            "expected {SIGNATURE_LEN}-byte signature, got {}",
            bytes.len()
        ))
    })
}

/// Decode a base58 public key, enforcing the 32-byte scheme length
pub fn decode_public_key(text: &str) -> Result<[u8; PUBLIC_KEY_LEN]> {
    let bytes = decode(text)?;
    bytes.as_slice().try_into().map_err(|_| {
        SolmobileError::MalformedEncoding(format!(
            "expected {PUBLIC_KEY_LEN}-byte public key, got {}",
            bytes.len()
        ))
    })
}
