/*
[INPUT]:  Nonces extracted from verified challenges
[OUTPUT]: Single-use decisions (fresh vs replayed)
[POS]:    Ledger layer - replay protection state
[UPDATE]: When adding ledger backends or changing eviction policy
*/

pub mod expiring;
pub mod memory;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AuthConfig;
use crate::types::LedgerKind;

pub use expiring::ExpiringNonceLedger;
pub use memory::InMemoryNonceLedger;

/// Store of consumed nonces.
///
/// Implementations must make [`NonceStore::try_consume`] atomic: two
/// concurrent calls with the same nonce yield exactly one `true`.
pub trait NonceStore: Send + Sync {
    fn has_been_used(&self, nonce: &str) -> bool;

    fn mark_used(&self, nonce: &str);

    /// Mark `nonce` as used if it was not already. Returns `false` on replay.
    fn try_consume(&self, nonce: &str) -> bool;

    /// Like [`NonceStore::try_consume`], but the nonce must be remembered for
    /// at least `retain_for`. Stores without expiry ignore the hint.
    fn try_consume_for(&self, nonce: &str, retain_for: Duration) -> bool {
        let _ = retain_for;
        self.try_consume(nonce)
    }

    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the ledger selected by `config`
pub fn ledger_from_config(config: &AuthConfig) -> Arc<dyn NonceStore> {
    match config.ledger {
        LedgerKind::Bounded => {
            Arc::new(InMemoryNonceLedger::with_capacity(config.ledger_capacity))
        }
        LedgerKind::Expiring => Arc::new(ExpiringNonceLedger::new(config.freshness_window())),
    }
}
