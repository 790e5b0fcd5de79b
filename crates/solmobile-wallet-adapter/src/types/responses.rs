/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Challenge, Credentials};

/// Envelope `{ "data": ... }` used by the authentication service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

pub type NonceResponse = DataEnvelope<Challenge>;
pub type VerifyResponse = DataEnvelope<Credentials>;

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Result of the `getBalance` RPC call; the context object is ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcBalance {
    pub value: u64,
}
