/*
[INPUT]:  Credentials issued by the authentication service
[OUTPUT]: Token retrieval and session status
[POS]:    Auth layer - credential lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::types::Credentials;

/// Stored credentials with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCredentials {
    pub credentials: Credentials,
    pub wallet_address: String,
    pub issued_at: DateTime<Utc>,
}

/// Thread-safe store for session credentials
#[derive(Debug, Clone)]
pub struct TokenStore {
    data: Arc<RwLock<Option<StoredCredentials>>>,
}

impl TokenStore {
    /// Create a new empty token store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store freshly issued credentials
    pub fn set(&self, credentials: Credentials, wallet_address: String) {
        let stored = StoredCredentials {
            credentials,
            wallet_address,
            issued_at: Utc::now(),
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(stored);
    }

    /// The current access token if available
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard
            .as_ref()
            .map(|stored| stored.credentials.access_token.clone())
    }

    /// Full stored credentials if available
    pub fn credentials(&self) -> Option<StoredCredentials> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.data.read().unwrap();
        guard.is_some()
    }

    /// Drop the stored credentials
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
