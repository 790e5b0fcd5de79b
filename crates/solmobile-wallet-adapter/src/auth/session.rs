/*
[INPUT]:  Wallet device capability and app identity descriptor
[OUTPUT]: Connected identity, detached signatures, session teardown
[POS]:    Auth layer - owns the device authorization for one session
[UPDATE]: When the device protocol or session lifecycle changes
*/

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::device::WalletDevice;
use crate::http::{Result, SolmobileError};
use crate::types::{AppIdentity, AuthorizationHandle, Cluster, Identity, WalletSignature};

#[derive(Debug, Clone)]
struct SessionState {
    handle: AuthorizationHandle,
    identity: Identity,
}

/// A connected wallet session.
///
/// Owns the `AuthorizationHandle` for the lifetime of the connection and
/// gates the device channel: the device does not support interleaved
/// requests, so a second authorize/sign while one is pending fails with
/// `DeviceBusy`.
pub struct WalletSession {
    device: Arc<dyn WalletDevice>,
    app_identity: AppIdentity,
    cluster: Cluster,
    device_gate: Mutex<()>,
    state: RwLock<Option<SessionState>>,
}

impl WalletSession {
    pub fn new(device: Arc<dyn WalletDevice>, app_identity: AppIdentity, cluster: Cluster) -> Self {
        Self {
            device,
            app_identity,
            cluster,
            device_gate: Mutex::new(()),
            state: RwLock::new(None),
        }
    }

    /// Connect to the wallet device and select the first reported account.
    ///
    /// `UserDeclined` if the operator rejects, `InsecureContext` if the
    /// transport precondition is unmet, `DeviceUnavailable` for any other
    /// device-side failure.
    pub async fn connect(&self) -> Result<Identity> {
        let _gate = self
            .device_gate
            .try_lock()
            .map_err(|_| SolmobileError::DeviceBusy)?;

        let authorization = self
            .device
            .authorize(&self.app_identity, self.cluster)
            .await
            .map_err(map_device_error)?;

        let account = authorization.accounts.first().ok_or_else(|| {
            SolmobileError::InvalidResponse("device reported no accounts".to_string())
        })?;
        let identity = Identity::from_bytes(&account.address_bytes()?)?;

        debug!(wallet = %identity, "wallet session connected");
        let mut state = self.state.write().unwrap();
        *state = Some(SessionState {
            handle: AuthorizationHandle::new(authorization.auth_token),
            identity: identity.clone(),
        });

        Ok(identity)
    }

    /// The connected identity, if any
    pub fn identity(&self) -> Option<Identity> {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|state| state.identity.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.state.read().unwrap().is_some()
    }

    /// End the session.
    ///
    /// Local state is cleared first; revocation with the device is
    /// best-effort and a failure is logged, never surfaced. Waits for an
    /// in-flight device interaction rather than interleaving with it.
    pub async fn disconnect(&self) {
        let handle = self
            .state
            .write()
            .unwrap()
            .take()
            .map(|state| state.handle);

        let Some(handle) = handle else {
            return;
        };

        let _gate = self.device_gate.lock().await;
        if let Err(error) = self.device.deauthorize(handle.token()).await {
            warn!(%error, "wallet deauthorize failed; local session already cleared");
        } else {
            debug!("wallet session deauthorized");
        }
    }

    /// Request a detached signature over `message` from the device.
    ///
    /// Re-establishes authorization with the held handle first; the handle
    /// is rotated when the device issues a fresh token.
    pub async fn sign_bytes(&self, message: &[u8]) -> Result<WalletSignature> {
        let _gate = self
            .device_gate
            .try_lock()
            .map_err(|_| SolmobileError::DeviceBusy)?;

        let (handle, identity) = {
            let state = self.state.read().unwrap();
            let state = state
                .as_ref()
                .ok_or_else(|| SolmobileError::Config("no connected wallet session".to_string()))?;
            (state.handle.clone(), state.identity.clone())
        };

        let fresh_token = self
            .device
            .reauthorize(handle.token())
            .await
            .map_err(map_device_error)?;
        {
            let mut state = self.state.write().unwrap();
            if let Some(state) = state.as_mut() {
                state.handle = AuthorizationHandle::new(fresh_token);
            }
        }

        let signatures = self
            .device
            .sign_messages(
                &[identity.public_key_bytes().to_vec()],
                &[message.to_vec()],
            )
            .await
            .map_err(map_device_error)?;

        let first = signatures.into_iter().next().ok_or_else(|| {
            SolmobileError::InvalidResponse("device returned no signatures".to_string())
        })?;
        WalletSignature::from_bytes(&first)
    }

    /// Ad-hoc signing: sign UTF-8 text, returning the base58 signature
    pub async fn sign_text_message(&self, message: &str) -> Result<String> {
        Ok(self.sign_bytes(message.as_bytes()).await?.to_base58())
    }
}

// Declines and transport preconditions pass through untouched; anything
// else the device reports becomes DeviceUnavailable.
fn map_device_error(error: SolmobileError) -> SolmobileError {
    match error {
        SolmobileError::UserDeclined
        | SolmobileError::InsecureContext
        | SolmobileError::DeviceUnavailable(_)
        | SolmobileError::DeviceBusy => error,
        other => SolmobileError::DeviceUnavailable(other.to_string()),
    }
}
