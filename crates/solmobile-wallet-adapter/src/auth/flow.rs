/*
[INPUT]:  Wallet session and challenge service client
[OUTPUT]: Observable handshake state and issued credentials
[POS]:    Auth layer - orchestrates the three-step authentication flow
[UPDATE]: When handshake steps or state transitions change
*/

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::session::WalletSession;
use super::token_store::TokenStore;
use crate::http::SolmobileClient;
use crate::types::{Challenge, Credentials};

/// Steps of the challenge-response handshake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    #[default]
    Idle,
    FetchingNonce,
    Signing,
    Verifying,
    Authenticated,
    Error,
}

impl AuthStep {
    /// A new handshake may only begin from a resting state
    pub fn can_start(self) -> bool {
        matches!(self, AuthStep::Idle | AuthStep::Error)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AuthStep::Authenticated | AuthStep::Error)
    }
}

/// Observable snapshot of the handshake state machine
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub step: AuthStep,
    pub challenge: Option<Challenge>,
    pub signature_base58: Option<String>,
    pub credentials: Option<Credentials>,
    pub error: Option<String>,
}

/// The three-step authentication flow.
///
/// idle -> fetching_nonce -> signing -> verifying -> authenticated, with
/// error reachable from the three middle states. Each step is attempted
/// exactly once per start; the sign payload is always derived from the
/// challenge fetched in the current attempt, so a signature can never be
/// submitted against another attempt's nonce.
pub struct AuthFlow {
    client: SolmobileClient,
    session: Arc<WalletSession>,
    token_store: TokenStore,
    state_tx: watch::Sender<AuthState>,
}

impl AuthFlow {
    pub fn new(client: SolmobileClient, session: Arc<WalletSession>) -> Self {
        let (state_tx, _) = watch::channel(AuthState::default());
        Self {
            client,
            session,
            token_store: TokenStore::new(),
            state_tx,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes; rendering is the caller's concern
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Store holding credentials after a successful handshake
    pub fn token_store(&self) -> &TokenStore {
        &self.token_store
    }

    /// Run the handshake to completion.
    ///
    /// Requires a connected wallet session. A start while a handshake is
    /// already in flight, or after one has succeeded, is a no-op that
    /// returns the current state. From `error`, a start retries from
    /// fetching_nonce with all prior partial state discarded.
    pub async fn start(&self) -> AuthState {
        let Some(identity) = self.session.identity() else {
            debug!("start ignored: no connected wallet session");
            return self.state();
        };

        let began = self.state_tx.send_if_modified(|state| {
            if !state.step.can_start() {
                return false;
            }
            *state = AuthState {
                step: AuthStep::FetchingNonce,
                ..AuthState::default()
            };
            true
        });
        if !began {
            debug!("start ignored: handshake already in flight");
            return self.state();
        }
        self.token_store.clear();

        // Step 1: request nonce
        let challenge = match self.client.request_nonce(&identity).await {
            Ok(challenge) => {
                self.state_tx.send_modify(|state| {
                    state.challenge = Some(challenge.clone());
                    state.step = AuthStep::Signing;
                });
                challenge
            }
            Err(error) => return self.fail(format!("Failed to get nonce: {error}")),
        };

        // Step 2: sign the message belonging to this attempt's challenge
        let signature_base58 = match self.session.sign_bytes(challenge.message.as_bytes()).await {
            Ok(signature) => {
                let signature_base58 = signature.to_base58();
                self.state_tx.send_modify(|state| {
                    state.signature_base58 = Some(signature_base58.clone());
                    state.step = AuthStep::Verifying;
                });
                signature_base58
            }
            Err(error) if error.is_user_declined() => {
                return self.fail("Signing rejected by wallet.".to_string());
            }
            Err(error) => return self.fail(format!("Failed to sign message: {error}")),
        };

        // Step 3: submit for verification
        match self
            .client
            .verify_signature(&identity, &signature_base58, &challenge.nonce)
            .await
        {
            Ok(credentials) => {
                self.token_store
                    .set(credentials.clone(), identity.to_base58());
                self.state_tx.send_modify(|state| {
                    state.credentials = Some(credentials);
                    state.step = AuthStep::Authenticated;
                });
                debug!(wallet = %identity, "handshake authenticated");
            }
            Err(error) => return self.fail(format!("Verification failed: {error}")),
        }

        self.state()
    }

    /// Return to idle, dropping challenge, signature, credentials, and
    /// any recorded error. Ignored while a handshake is in flight.
    pub fn reset(&self) {
        self.token_store.clear();
        self.state_tx.send_if_modified(|state| {
            if !state.step.is_terminal() && state.step != AuthStep::Idle {
                return false;
            }
            *state = AuthState::default();
            true
        });
    }

    fn fail(&self, message: String) -> AuthState {
        warn!(%message, "authentication handshake failed");
        self.state_tx.send_modify(|state| {
            state.step = AuthStep::Error;
            state.error = Some(message);
        });
        self.state()
    }
}
