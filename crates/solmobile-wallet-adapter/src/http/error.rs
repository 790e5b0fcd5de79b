/*
[INPUT]:  Error sources (device channel, HTTP transport, auth service, decoding)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the SolMobile adapter
#[derive(Error, Debug)]
pub enum SolmobileError {
    /// HTTP transport failure (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication service returned a non-success status
    #[error("server rejected request (status {status}): {message}")]
    ServerRejected { status: u16, message: String },

    /// JSON-RPC endpoint returned an error object
    #[error("RPC error (code {code}): {message}")]
    Rpc { code: i64, message: String },

    /// Wallet operator refused the authorize or sign request
    #[error("request rejected by wallet operator")]
    UserDeclined,

    /// Calling environment does not meet the wallet's transport-security requirement
    #[error("wallet requires a secure context")]
    InsecureContext,

    /// Wallet device failed for a reason other than an explicit decline
    #[error("wallet device unavailable: {0}")]
    DeviceUnavailable(String),

    /// A device interaction is already in flight for this session
    #[error("wallet device busy with another request")]
    DeviceBusy,

    /// Text input is not valid base58 or decodes to the wrong length
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration or usage error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SolmobileError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SolmobileError::Http(_)
                | SolmobileError::DeviceUnavailable(_)
                | SolmobileError::DeviceBusy
                | SolmobileError::InvalidResponse(_)
        )
    }

    /// Check if the error is an explicit refusal by the wallet operator
    pub fn is_user_declined(&self) -> bool {
        matches!(self, SolmobileError::UserDeclined)
    }

    /// Create a rejection error from status code and response body
    pub fn server_rejected(status: StatusCode, message: impl Into<String>) -> Self {
        SolmobileError::ServerRejected {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for SolMobile operations
pub type Result<T> = std::result::Result<T, SolmobileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let busy = SolmobileError::DeviceBusy;
        assert!(busy.is_retryable());

        let declined = SolmobileError::UserDeclined;
        assert!(!declined.is_retryable());

        let rejected = SolmobileError::ServerRejected {
            status: 401,
            message: "nonce expired".to_string(),
        };
        assert!(!rejected.is_retryable());
    }

    #[test]
    fn test_error_is_user_declined() {
        assert!(SolmobileError::UserDeclined.is_user_declined());
        assert!(!SolmobileError::InsecureContext.is_user_declined());
        assert!(!SolmobileError::DeviceBusy.is_user_declined());
    }

    #[test]
    fn test_server_rejected_creation() {
        let err = SolmobileError::server_rejected(StatusCode::BAD_REQUEST, "Invalid nonce");
        match err {
            SolmobileError::ServerRejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid nonce");
            }
            _ => panic!("Expected ServerRejected error variant"),
        }
    }
}
