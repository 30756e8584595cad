/*
[INPUT]:  Claimed address, challenge text, and wallet signature
[OUTPUT]: Whether the signature is valid for that address and text
[POS]:    Verifier layer - external signature primitive abstraction
[UPDATE]: When adding new signature schemes or remote verifiers
*/

pub mod evm;
pub mod http;
pub mod solana;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AuthError, Result};
use crate::types::Chain;

pub use evm::EvmSignatureVerifier;
pub use http::{HttpSignatureVerifier, HttpVerifierConfig};
pub use solana::SolanaSignatureVerifier;

/// Verifies a wallet signature over a message.
///
/// `Ok(false)` is a definitive rejection. `Err` means the check could not be
/// performed (transport failure, remote error) and is reported as
/// `VERIFICATION_ERROR` by the authenticator.
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    async fn verify(&self, address: &str, message: &str, signature: &str) -> Result<bool>;
}

/// Build the local verifier for a chain
pub fn verifier_for_chain(chain: Chain) -> Arc<dyn SignatureVerifier> {
    match chain {
        Chain::Evm => Arc::new(EvmSignatureVerifier),
        Chain::Solana => Arc::new(SolanaSignatureVerifier),
    }
}

/// Outcome returned by [`MockSignatureVerifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOutcome {
    Accept,
    Reject,
    Fail,
}

/// Mock verifier for testing
#[derive(Debug)]
pub struct MockSignatureVerifier {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockSignatureVerifier {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn accepting() -> Self {
        Self::new(MockOutcome::Accept)
    }

    pub fn rejecting() -> Self {
        Self::new(MockOutcome::Reject)
    }

    pub fn failing() -> Self {
        Self::new(MockOutcome::Fail)
    }

    /// Number of times `verify` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignatureVerifier for MockSignatureVerifier {
    async fn verify(&self, _address: &str, _message: &str, _signature: &str) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            MockOutcome::Accept => Ok(true),
            MockOutcome::Reject => Ok(false),
            MockOutcome::Fail => Err(AuthError::Verifier("mock verifier failure".to_string())),
        }
    }
}
