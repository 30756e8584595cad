/*
[INPUT]:  Wallet addresses, signers, verifiers, and nonce ledgers
[OUTPUT]: Challenges, signatures, and verification results
[POS]:    Auth layer - wallet-signature authentication protocol
[UPDATE]: When auth flow or signature methods change
*/

pub mod authenticator;
pub mod challenge;
pub mod evm_wallet;
pub mod solana_wallet;
pub mod wallet;

pub use authenticator::Authenticator;
pub use challenge::{Challenge, ParsedChallenge, generate_challenge, parse_challenge};
pub use evm_wallet::EvmWalletSigner;
pub use solana_wallet::SolanaWalletSigner;
pub use wallet::{MockWalletSigner, WalletSigner};
