/*
[INPUT]:  Test configuration requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for totem-auth tests

use std::sync::Arc;

use totem_auth::{
    Authenticator,
    InMemoryNonceLedger,
    MockSignatureVerifier,
    NonceStore,
    SignatureVerifier,
};

/// Well-known development key (anvil account #0)
#[allow(dead_code)]
pub const TEST_EVM_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xABCD000000000000000000000000000000001234";

/// Authenticator over a fresh in-memory ledger
#[allow(dead_code)]
pub fn authenticator_with(verifier: impl SignatureVerifier + 'static) -> Authenticator {
    Authenticator::new(Arc::new(verifier), Arc::new(InMemoryNonceLedger::new()))
}

/// Authenticator with an accepting mock verifier and a shared ledger handle
#[allow(dead_code)]
pub fn accepting_authenticator() -> (Authenticator, Arc<InMemoryNonceLedger>) {
    let ledger = Arc::new(InMemoryNonceLedger::new());
    let store: Arc<dyn NonceStore> = ledger.clone();
    let auth = Authenticator::new(Arc::new(MockSignatureVerifier::accepting()), store);
    (auth, ledger)
}
