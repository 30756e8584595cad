/*
[INPUT]:  EVM address, challenge text, hex personal-sign signature
[OUTPUT]: Whether the recovered signer matches the claimed address
[POS]:    Verifier layer - EIP-191 signature recovery
[UPDATE]: When supporting contract wallets or other EVM signature formats
*/

use alloy_primitives::Signature;
use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::verifier::SignatureVerifier;

/// Verifies EIP-191 `personal_sign` signatures by address recovery
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmSignatureVerifier;

#[async_trait]
impl SignatureVerifier for EvmSignatureVerifier {
    async fn verify(&self, address: &str, message: &str, signature: &str) -> Result<bool> {
        let Some(signature) = decode_signature(signature) else {
            debug!(address, "undecodable EVM signature");
            return Ok(false);
        };

        match signature.recover_address_from_msg(message.as_bytes()) {
            Ok(recovered) => {
                let recovered = recovered.to_checksum(None);
                Ok(normalize_evm_address(&recovered) == normalize_evm_address(address))
            }
            Err(err) => {
                debug!(address, error = %err, "EVM signature recovery failed");
                Ok(false)
            }
        }
    }
}

fn decode_signature(signature: &str) -> Option<Signature> {
    let signature = signature.trim();
    let signature = signature
        .strip_prefix("0x")
        .or_else(|| signature.strip_prefix("0X"))
        .unwrap_or(signature);
    let bytes = hex::decode(signature).ok()?;
    if bytes.len() != 65 {
        return None;
    }
    Signature::from_raw(&bytes).ok()
}

/// Lowercase, prefix-free form used for case-insensitive address comparison
pub fn normalize_evm_address(address: &str) -> String {
    let address = address.trim();
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EvmWalletSigner, WalletSigner};

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn test_accepts_own_signature_any_case() {
        let wallet = EvmWalletSigner::new(TEST_KEY).unwrap();
        let signature = wallet.sign_message("hello").await.unwrap();

        let verifier = EvmSignatureVerifier;
        assert!(verifier.verify(wallet.address(), "hello", &signature).await.unwrap());

        let lower = wallet.address().to_ascii_lowercase();
        assert!(verifier.verify(&lower, "hello", &signature).await.unwrap());

        let upper = format!("0x{}", wallet.address()[2..].to_ascii_uppercase());
        assert!(verifier.verify(&upper, "hello", &signature).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_other_message() {
        let wallet = EvmWalletSigner::new(TEST_KEY).unwrap();
        let signature = wallet.sign_message("hello").await.unwrap();

        let verifier = EvmSignatureVerifier;
        assert!(!verifier.verify(wallet.address(), "goodbye", &signature).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_other_address() {
        let wallet = EvmWalletSigner::new(TEST_KEY).unwrap();
        let signature = wallet.sign_message("hello").await.unwrap();

        let verifier = EvmSignatureVerifier;
        let other = "0x0000000000000000000000000000000000000000";
        assert!(!verifier.verify(other, "hello", &signature).await.unwrap());
    }

    #[tokio::test]
    async fn test_garbage_signature_is_rejection_not_error() {
        let verifier = EvmSignatureVerifier;
        let address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert!(!verifier.verify(address, "hello", "0xdeadbeef").await.unwrap());
        assert!(!verifier.verify(address, "hello", "not hex").await.unwrap());
        assert!(!verifier.verify(address, "hello", "").await.unwrap());
    }

    #[test]
    fn test_normalize_evm_address() {
        assert_eq!(normalize_evm_address(" 0XAbC "), "abc");
        assert_eq!(normalize_evm_address("abc"), "abc");
    }
}
