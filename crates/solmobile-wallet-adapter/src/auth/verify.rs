/*
[INPUT]:  Message bytes, detached signature, and public key
[OUTPUT]: Boolean verification verdict
[POS]:    Auth layer - local offline signature verification
[UPDATE]: When changing the signature scheme or verdict semantics
*/

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use super::codec;
use crate::types::{Identity, PUBLIC_KEY_LEN, SIGNATURE_LEN};

/// Verify a detached Ed25519 signature over the exact message bytes.
///
/// Total over byte-slice inputs: wrong-length or structurally invalid
/// signatures and keys are a `false` verdict, never a panic or error.
pub fn verify_detached(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature_bytes) = <&[u8; SIGNATURE_LEN]>::try_from(signature) else {
        return false;
    };
    let Ok(key_bytes) = <[u8; PUBLIC_KEY_LEN]>::try_from(public_key) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };

    verifying_key
        .verify(message, &Signature::from_bytes(signature_bytes))
        .is_ok()
}

/// Verify a UTF-8 message against a base58 signature and a wallet identity.
///
/// Binary contract: text that fails to decode is an `invalid` verdict,
/// indistinguishable from a forged signature.
pub fn verify_text_signature(message: &str, signature_base58: &str, identity: &Identity) -> bool {
    let Ok(signature) = codec::decode(signature_base58.trim()) else {
        return false;
    };
    verify_detached(message.as_bytes(), &signature, identity.public_key_bytes())
}
