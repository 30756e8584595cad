/*
[INPUT]:  Solana private key (base58 seed or keypair) and message to sign
[OUTPUT]: Base58-encoded ed25519 signatures and base58 address
[POS]:    Auth layer - Solana wallet implementation
[UPDATE]: When Solana key or signature encoding changes
*/

use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use crate::auth::WalletSigner;
use crate::error::{AuthError, Result};
use crate::types::Chain;

/// Solana wallet signer implementation
pub struct SolanaWalletSigner {
    signing_key: SigningKey,
    address: String,
}

impl SolanaWalletSigner {
    /// Create a new Solana wallet signer from a base58-encoded private key
    /// Supports 64-byte keypair or 32-byte seed
    pub fn new(private_key_base58: &str) -> Result<Self> {
        let bytes = bs58::decode(private_key_base58.trim())
            .into_vec()
            .map_err(|e| AuthError::InvalidKey(format!("Invalid base58 private key: {e}")))?;

        let signing_key = match bytes.len() {
            64 => {
                let keypair: [u8; 64] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| AuthError::InvalidKey("Invalid keypair bytes".to_string()))?;
                SigningKey::from_keypair_bytes(&keypair)
                    .map_err(|e| AuthError::InvalidKey(format!("Invalid keypair bytes: {e}")))?
            }
            32 => {
                let seed: [u8; 32] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| AuthError::InvalidKey("Invalid seed bytes".to_string()))?;
                SigningKey::from_bytes(&seed)
            }
            other => {
                return Err(AuthError::InvalidKey(format!(
                    "Invalid private key length: expected 32 or 64 bytes, got {other}"
                )));
            }
        };

        Ok(Self::from_signing_key(signing_key))
    }

    /// Generate a new random keypair
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        Self {
            signing_key,
            address,
        }
    }
}

#[async_trait]
impl WalletSigner for SolanaWalletSigner {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self.signing_key.sign(message.as_bytes());
        Ok(bs58::encode(signature.to_bytes()).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_solana_signer_from_seed() {
        // 32 zero bytes in base58
        let seed = "11111111111111111111111111111111";
        let signer = SolanaWalletSigner::new(seed).unwrap();

        assert_eq!(signer.chain(), Chain::Solana);
        assert_eq!(
            bs58::decode(signer.address()).into_vec().unwrap().len(),
            32
        );

        let signature = signer.sign_message("hello world").await.unwrap();
        assert_eq!(bs58::decode(signature).into_vec().unwrap().len(), 64);
    }

    #[test]
    fn test_solana_signer_from_keypair_bytes() {
        let generated = SolanaWalletSigner::generate();
        let keypair = bs58::encode(generated.signing_key.to_keypair_bytes()).into_string();

        let restored = SolanaWalletSigner::new(&keypair).unwrap();
        assert_eq!(restored.address(), generated.address());
    }

    #[test]
    fn test_solana_signer_invalid_key() {
        assert!(SolanaWalletSigner::new("invalid_base58_!@#").is_err());
        assert!(SolanaWalletSigner::new("bs58tooShort").is_err());
    }
}
