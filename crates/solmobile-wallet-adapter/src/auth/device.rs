/*
[INPUT]:  Authorize/sign requests routed to the external wallet device
[OUTPUT]: Authorization tokens, account addresses, and raw signatures
[POS]:    Auth layer - external signing device abstraction
[UPDATE]: When the device protocol or mock behaviors change
*/

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use ed25519_dalek::{Signer as _, SigningKey};
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::http::{Result, SolmobileError};
use crate::types::{AppIdentity, Cluster};

/// A single account reported by the wallet device.
///
/// Addresses are base64-encoded public key bytes, per the mobile wallet
/// adapter protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAccount {
    pub address: String,
}

impl DeviceAccount {
    /// Decode the account address into raw public key bytes
    pub fn address_bytes(&self) -> Result<Vec<u8>> {
        BASE64.decode(&self.address).map_err(|e| {
            SolmobileError::InvalidResponse(format!(
                "device account address is not valid base64: {e}"
            ))
        })
    }
}

/// Result of a successful authorize call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAuthorization {
    pub auth_token: String,
    pub accounts: Vec<DeviceAccount>,
}

/// Capability interface to the external signing device.
///
/// The real device is a host-provided transact bridge; this trait is the
/// injection seam that keeps the core testable with a fake device. The
/// trait is async to support hardware wallets and out-of-process signers.
#[async_trait]
pub trait WalletDevice: Send + Sync {
    /// Request authorization for the given app identity and cluster
    async fn authorize(
        &self,
        identity: &AppIdentity,
        cluster: Cluster,
    ) -> Result<DeviceAuthorization>;

    /// Renew a previously issued authorization token, returning a fresh one
    async fn reauthorize(&self, auth_token: &str) -> Result<String>;

    /// Sign each payload under the corresponding account address
    async fn sign_messages(
        &self,
        addresses: &[Vec<u8>],
        payloads: &[Vec<u8>],
    ) -> Result<Vec<Vec<u8>>>;

    /// Revoke an authorization token
    async fn deauthorize(&self, auth_token: &str) -> Result<()>;
}

/// Mock wallet device backed by a real Ed25519 keypair.
///
/// Failure behaviors are scriptable per call site so tests can exercise
/// the full device error taxonomy; call counters let tests assert how
/// many device interactions a flow performed.
#[derive(Debug)]
pub struct MockWalletDevice {
    signing_key: SigningKey,
    issued_token: Mutex<Option<String>>,
    decline_authorize: AtomicBool,
    decline_sign: AtomicBool,
    unavailable: AtomicBool,
    insecure_context: AtomicBool,
    fail_deauthorize: AtomicBool,
    sign_delay_ms: AtomicU64,
    authorize_calls: AtomicUsize,
    reauthorize_calls: AtomicUsize,
    sign_calls: AtomicUsize,
    deauthorize_calls: AtomicUsize,
}

impl MockWalletDevice {
    /// Create a mock device with a random keypair
    pub fn new() -> Self {
        Self::from_seed(SigningKey::generate(&mut OsRng).to_bytes())
    }

    /// Create a mock device with a deterministic keypair
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
            issued_token: Mutex::new(None),
            decline_authorize: AtomicBool::new(false),
            decline_sign: AtomicBool::new(false),
            unavailable: AtomicBool::new(false),
            insecure_context: AtomicBool::new(false),
            fail_deauthorize: AtomicBool::new(false),
            sign_delay_ms: AtomicU64::new(0),
            authorize_calls: AtomicUsize::new(0),
            reauthorize_calls: AtomicUsize::new(0),
            sign_calls: AtomicUsize::new(0),
            deauthorize_calls: AtomicUsize::new(0),
        }
    }

    /// The device keypair's public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn set_decline_authorize(&self, decline: bool) {
        self.decline_authorize.store(decline, Ordering::SeqCst);
    }

    pub fn set_decline_sign(&self, decline: bool) {
        self.decline_sign.store(decline, Ordering::SeqCst);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_insecure_context(&self, insecure: bool) {
        self.insecure_context.store(insecure, Ordering::SeqCst);
    }

    pub fn set_fail_deauthorize(&self, fail: bool) {
        self.fail_deauthorize.store(fail, Ordering::SeqCst);
    }

    /// Delay sign_messages responses, for exercising in-flight contention
    pub fn set_sign_delay(&self, delay: Duration) {
        self.sign_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn authorize_calls(&self) -> usize {
        self.authorize_calls.load(Ordering::SeqCst)
    }

    pub fn reauthorize_calls(&self) -> usize {
        self.reauthorize_calls.load(Ordering::SeqCst)
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }

    pub fn deauthorize_calls(&self) -> usize {
        self.deauthorize_calls.load(Ordering::SeqCst)
    }

    fn check_transport(&self) -> Result<()> {
        if self.insecure_context.load(Ordering::SeqCst) {
            return Err(SolmobileError::InsecureContext);
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SolmobileError::DeviceUnavailable(
                "mock device offline".to_string(),
            ));
        }
        Ok(())
    }

    fn issue_token(&self) -> String {
        let token = Uuid::new_v4().to_string();
        *self.issued_token.lock().unwrap() = Some(token.clone());
        token
    }
}

impl Default for MockWalletDevice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletDevice for MockWalletDevice {
    async fn authorize(
        &self,
        _identity: &AppIdentity,
        _cluster: Cluster,
    ) -> Result<DeviceAuthorization> {
        self.authorize_calls.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        if self.decline_authorize.load(Ordering::SeqCst) {
            return Err(SolmobileError::UserDeclined);
        }

        Ok(DeviceAuthorization {
            auth_token: self.issue_token(),
            accounts: vec![DeviceAccount {
                address: BASE64.encode(self.public_key_bytes()),
            }],
        })
    }

    async fn reauthorize(&self, auth_token: &str) -> Result<String> {
        self.reauthorize_calls.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;

        let known = self
            .issued_token
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|token| token == auth_token);
        if !known {
            return Err(SolmobileError::DeviceUnavailable(
                "unknown auth token".to_string(),
            ));
        }

        Ok(self.issue_token())
    }

    async fn sign_messages(
        &self,
        addresses: &[Vec<u8>],
        payloads: &[Vec<u8>],
    ) -> Result<Vec<Vec<u8>>> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);

        let delay_ms = self.sign_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        self.check_transport()?;
        if self.decline_sign.load(Ordering::SeqCst) {
            return Err(SolmobileError::UserDeclined);
        }
        if addresses.len() != payloads.len() {
            return Err(SolmobileError::DeviceUnavailable(format!(
                "{} addresses for {} payloads",
                addresses.len(),
                payloads.len()
            )));
        }

        let own_key = self.public_key_bytes();
        for address in addresses {
            if address.as_slice() != own_key {
                return Err(SolmobileError::DeviceUnavailable(
                    "unknown signing address".to_string(),
                ));
            }
        }

        Ok(payloads
            .iter()
            .map(|payload| self.signing_key.sign(payload).to_bytes().to_vec())
            .collect())
    }

    async fn deauthorize(&self, _auth_token: &str) -> Result<()> {
        self.deauthorize_calls.fetch_add(1, Ordering::SeqCst);
        self.check_transport()?;
        if self.fail_deauthorize.load(Ordering::SeqCst) {
            return Err(SolmobileError::DeviceUnavailable(
                "deauthorize failed".to_string(),
            ));
        }

        *self.issued_token.lock().unwrap() = None;
        Ok(())
    }
}
