/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST and RPC communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod funds;

pub use client::{ClientConfig, SolmobileClient};
pub use error::{Result, SolmobileError};
pub use funds::{LAMPORTS_PER_SOL, lamports_to_sol};
