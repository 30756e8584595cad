/*
[INPUT]:  Base58 public key address, challenge text, base58 signature
[OUTPUT]: Whether the ed25519 signature is valid for the address
[POS]:    Verifier layer - Solana ed25519 verification
[UPDATE]: When Solana signature encoding changes
*/

use async_trait::async_trait;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::debug;

use crate::error::Result;
use crate::verifier::SignatureVerifier;

/// Verifies ed25519 signatures where the address is the base58 public key
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaSignatureVerifier;

#[async_trait]
impl SignatureVerifier for SolanaSignatureVerifier {
    async fn verify(&self, address: &str, message: &str, signature: &str) -> Result<bool> {
        let key = decode_fixed::<32>(address).and_then(|b| VerifyingKey::from_bytes(&b).ok());
        let Some(key) = key else {
            debug!(address, "address is not an ed25519 public key");
            return Ok(false);
        };

        let signature = decode_fixed::<64>(signature).map(|b| Signature::from_bytes(&b));
        let Some(signature) = signature else {
            debug!(address, "undecodable Solana signature");
            return Ok(false);
        };

        Ok(key.verify(message.as_bytes(), &signature).is_ok())
    }
}

fn decode_fixed<const N: usize>(value: &str) -> Option<[u8; N]> {
    let bytes = bs58::decode(value.trim()).into_vec().ok()?;
    bytes.try_into().ok()
}
