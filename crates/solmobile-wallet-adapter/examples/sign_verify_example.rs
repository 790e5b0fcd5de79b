/*
[INPUT]:  Mock wallet device and a free-form message
[OUTPUT]: Base58 signature and local verification verdicts
[POS]:    Examples - ad-hoc sign and offline verify demonstration
[UPDATE]: When the ad-hoc sign or verify contracts change
*/

use std::sync::Arc;

use solmobile_wallet_adapter::{
    AppIdentity, Cluster, MockWalletDevice, WalletSession, verify_text_signature,
};

/// Example: sign a message with the wallet and verify it locally
///
/// Verification is pure and offline; only signing reaches the device.
#[tokio::main]
async fn main() {
    println!("=== SolMobile Sign/Verify Example ===\n");

    let device = Arc::new(MockWalletDevice::new());
    let session = WalletSession::new(device, AppIdentity::default(), Cluster::Devnet);

    let identity = match session.connect().await {
        Ok(identity) => identity,
        Err(e) => {
            eprintln!("Failed to connect wallet: {e}");
            return;
        }
    };
    println!("✓ Wallet connected: {identity}");

    let message = "SolMobile says gm";
    let signature = match session.sign_text_message(message).await {
        Ok(signature) => signature,
        Err(e) => {
            eprintln!("Failed to sign message: {e}");
            return;
        }
    };
    println!("✓ Signed: {signature}");

    let verdict = verify_text_signature(message, &signature, &identity);
    println!("  verify(\"{message}\")          -> {verdict}");

    let tampered = verify_text_signature("SolMobile says gn", &signature, &identity);
    println!("  verify(tampered message)       -> {tampered}");

    let garbage = verify_text_signature(message, "not-a-signature", &identity);
    println!("  verify(undecodable signature)  -> {garbage}");

    session.disconnect().await;
    println!("\n✓ Session disconnected");
}
