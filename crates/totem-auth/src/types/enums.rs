/*
[INPUT]:  Protocol schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - chain and ledger selectors
[UPDATE]: When adding chains or ledger backends
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Evm,
    Solana,
}

/// Backing store used for consumed nonces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    /// Insertion-ordered set with capacity eviction
    #[default]
    Bounded,
    /// TTL cache keyed by nonce, entries expire with the freshness window
    Expiring,
}
