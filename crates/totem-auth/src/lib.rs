/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public wallet authentication crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod error;
pub mod ledger;
pub mod types;
pub mod verifier;

// Re-export commonly used types from auth
pub use auth::{
    Authenticator,
    Challenge,
    EvmWalletSigner,
    MockWalletSigner,
    ParsedChallenge,
    SolanaWalletSigner,
    WalletSigner,
    generate_challenge,
    parse_challenge,
};

pub use config::AuthConfig;
pub use error::{AuthError, Result};

// Re-export commonly used types from ledger
pub use ledger::{ExpiringNonceLedger, InMemoryNonceLedger, NonceStore};

// Re-export all types
pub use types::*;

// Re-export commonly used types from verifier
pub use verifier::{
    EvmSignatureVerifier,
    HttpSignatureVerifier,
    HttpVerifierConfig,
    MockSignatureVerifier,
    SignatureVerifier,
    SolanaSignatureVerifier,
    verifier_for_chain,
};
