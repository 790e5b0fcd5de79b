/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SolMobile adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthFlow,
    AuthState,
    AuthStep,
    MockWalletDevice,
    StoredCredentials,
    TokenStore,
    WalletDevice,
    WalletSession,
    verify_detached,
    verify_text_signature,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    LAMPORTS_PER_SOL,
    Result,
    SolmobileClient,
    SolmobileError,
    lamports_to_sol,
};

// Re-export all types
pub use types::*;
