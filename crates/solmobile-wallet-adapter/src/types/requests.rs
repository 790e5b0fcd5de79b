/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of POST /auth/nonce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonceRequest {
    pub wallet: String,
}

/// Body of POST /auth/verify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub wallet: String,
    pub signature: String,
    pub nonce: String,
}
