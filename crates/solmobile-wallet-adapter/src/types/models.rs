/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - core entities for the authentication protocol
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::codec;
use crate::http::{Result, SolmobileError};

/// Ed25519 public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 detached signature length in bytes
pub const SIGNATURE_LEN: usize = 64;

/// A connected wallet's public key.
///
/// Immutable once connected; the base58 text form is a deterministic
/// bijection of the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl Identity {
    /// Build an identity from raw public key bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let public_key: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            SolmobileError::InvalidResponse(format!(
                "expected {PUBLIC_KEY_LEN}-byte public key, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self { public_key })
    }

    /// Build an identity from a base58-encoded public key
    pub fn from_base58(text: &str) -> Result<Self> {
        let bytes = codec::decode(text)?;
        Self::from_bytes(&bytes)
    }

    /// Raw public key bytes
    pub fn public_key_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Base58 text form of the public key
    pub fn to_base58(&self) -> String {
        codec::encode(&self.public_key)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

/// A detached signature produced by the wallet device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSignature {
    bytes: [u8; SIGNATURE_LEN],
}

impl WalletSignature {
    /// Build a signature from raw bytes reported by the device
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            SolmobileError::InvalidResponse(format!(
                "expected {SIGNATURE_LEN}-byte signature, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// Raw signature bytes
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.bytes
    }

    /// Base58 text form of the signature
    pub fn to_base58(&self) -> String {
        codec::encode(&self.bytes)
    }
}

/// Opaque capability token issued by the wallet device for this session.
///
/// Valid until revoked or invalidated by the device; rotated on reauthorize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHandle {
    token: String,
}

impl AuthorizationHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// App identity descriptor presented to the wallet device on authorize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppIdentity {
    pub name: String,
    pub uri: String,
    pub icon: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            name: "SolMobile Wallet".to_string(),
            uri: "https://solmobile.app".to_string(),
            icon: "favicon.ico".to_string(),
        }
    }
}

/// A server-issued authentication nonce.
///
/// Single-use; the server is the sole authority on nonce validity. The
/// expiry is informational for display, not locally enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub message: String,
    pub nonce: String,
    #[serde(deserialize_with = "deserialize_expiry")]
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Display-only expiry check against the local clock
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

// The service emits either ISO-8601 text or epoch milliseconds.
fn deserialize_expiry<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Expiry {
        Text(String),
        EpochMillis(i64),
    }

    match Expiry::deserialize(deserializer)? {
        Expiry::Text(text) => text
            .parse::<DateTime<Utc>>()
            .map_err(serde::de::Error::custom),
        Expiry::EpochMillis(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| {
                serde::de::Error::custom(format!("epoch-ms timestamp out of range: {millis}"))
            }),
    }
}

/// Session credentials issued after successful verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Optional profile record attached to issued credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// A confirmed transaction signature from the activity read layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureInfo {
    pub signature: String,
    pub slot: u64,
    #[serde(rename = "blockTime", default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
}
