/*
[INPUT]:  Parsed CLI arguments and loaded configuration
[OUTPUT]: Challenge JSON, signatures, or verification results on stdout
[POS]:    Command layer - issue, sign, and verify challenges
[UPDATE]: When adding subcommands or changing their output
*/

use std::path::Path;

use anyhow::{Context, Result};
use totem_auth::{
    Authenticator,
    Chain,
    EvmWalletSigner,
    SolanaWalletSigner,
    VerificationResult,
    WalletSigner,
    generate_challenge,
};
use tracing::info;

use crate::config::CliConfig;

/// Render a fresh challenge for `address` as pretty JSON
pub fn challenge(address: &str) -> Result<String> {
    let challenge = generate_challenge(address);
    info!(address, nonce = %challenge.nonce, "challenge generated");
    serde_json::to_string_pretty(&challenge).context("serialize challenge")
}

/// Sign the message with a local private key
pub async fn sign(chain: Chain, private_key: &str, message: &str) -> Result<String> {
    let wallet: Box<dyn WalletSigner> = match chain {
        Chain::Evm => Box::new(EvmWalletSigner::new(private_key).context("load EVM key")?),
        Chain::Solana => Box::new(SolanaWalletSigner::new(private_key).context("load Solana key")?),
    };

    let signature = wallet
        .sign_message(message)
        .await
        .context("sign message")?;
    info!(address = wallet.address(), ?chain, "message signed");
    Ok(signature)
}

/// Verify a signed challenge with the configured verifier.
///
/// The nonce ledger lives only for this call, so a signed challenge replayed
/// in a later invocation is not rejected as `REPLAYED_NONCE`. Replay
/// protection needs a long-lived [`Authenticator`] shared across requests.
pub async fn verify(
    config: &CliConfig,
    address: &str,
    message: &str,
    signature: &str,
) -> Result<VerificationResult> {
    let verifier = config.build_verifier()?;
    let authenticator = Authenticator::from_config(verifier, config.auth.clone());
    Ok(authenticator.verify(address, message, signature).await)
}

/// Read a message file without altering line endings
pub fn read_message(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read message {}", path.display()))
}
