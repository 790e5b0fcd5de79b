/*
[INPUT]:  Wallet device capability and challenge service endpoints
[OUTPUT]: Connected sessions, signatures, and bearer credentials
[POS]:    Auth layer - challenge-response wallet authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod codec;
pub mod device;
pub mod flow;
pub mod session;
pub mod token_store;
pub mod verify;

pub use device::{DeviceAccount, DeviceAuthorization, MockWalletDevice, WalletDevice};
pub use flow::{AuthFlow, AuthState, AuthStep};
pub use session::WalletSession;
pub use token_store::{StoredCredentials, TokenStore};
pub use verify::{verify_detached, verify_text_signature};
