/*
[INPUT]:  Mock wallet device and authentication service endpoints
[OUTPUT]: Walkthrough of the three-step handshake
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When the handshake flow changes
*/

use std::sync::Arc;

use solmobile_wallet_adapter::{
    AppIdentity, AuthFlow, Cluster, MockWalletDevice, SolmobileClient, WalletSession,
};

/// Example: challenge-response authentication flow
///
/// 1. Connect the wallet session (device authorize)
/// 2. start() requests a nonce, signs it on the device, submits for verification
/// 3. Credentials land in the flow's token store
#[tokio::main]
async fn main() {
    println!("=== SolMobile Authentication Example ===\n");

    // A mock device stands in for the phone wallet here; in production,
    // implement WalletDevice over your platform's wallet-adapter bridge.
    let device = Arc::new(MockWalletDevice::new());
    let session = Arc::new(WalletSession::new(
        device,
        AppIdentity::default(),
        Cluster::Devnet,
    ));

    let identity = match session.connect().await {
        Ok(identity) => identity,
        Err(e) => {
            eprintln!("Failed to connect wallet: {e}");
            return;
        }
    };
    println!("✓ Wallet connected: {identity}");

    let client = match SolmobileClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            return;
        }
    };
    println!("✓ HTTP client created");

    let flow = AuthFlow::new(client, session.clone());
    let mut updates = flow.subscribe();

    // Each state change is observable; a UI would render these
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let step = updates.borrow().step;
            println!("  step -> {step:?}");
        }
    });

    println!("\nRunning handshake against the default service URL...");
    let state = flow.start().await;

    match state.credentials {
        Some(credentials) => {
            println!("✓ Authenticated");
            println!("  access_token:  {}", credentials.access_token);
            println!("  refresh_token: {}", credentials.refresh_token);
        }
        None => {
            // Expected offline: the nonce request has no server to reach
            println!("Handshake did not complete: {}", state.error.unwrap_or_default());
        }
    }

    session.disconnect().await;
    println!("\n✓ Session disconnected");
}
