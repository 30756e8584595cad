/*
[INPUT]:  Challenge text to sign and wallet key material
[OUTPUT]: Signature string accepted by the matching verifier
[POS]:    Auth layer - wallet signing abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Chain;

/// Trait for wallet signing operations
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the blockchain chain type
    fn chain(&self) -> Chain;

    /// Get the wallet address
    fn address(&self) -> &str;

    /// Sign a message and return the signature
    ///
    /// For EVM: Returns hex-encoded 65-byte signature (0x...)
    /// For Solana: Returns base58-encoded 64-byte signature
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    chain: Chain,
    address: String,
    signature: String,
}

impl MockWalletSigner {
    /// Create a new mock signer with predetermined signature
    pub fn new(chain: Chain, address: &str, signature: &str) -> Self {
        Self {
            chain,
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_signer() {
        let signer = MockWalletSigner::new(Chain::Evm, "0x1234567890abcdef", "sig1");

        assert_eq!(signer.chain(), Chain::Evm);
        assert_eq!(signer.address(), "0x1234567890abcdef");

        let signature = signer.sign_message("any challenge").await.unwrap();
        assert_eq!(signature, "sig1");
    }
}
