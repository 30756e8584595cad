/*
[INPUT]:  Deserialized configuration values (YAML/JSON) or defaults
[OUTPUT]: Authenticator tuning parameters
[POS]:    Configuration layer - protocol limits
[UPDATE]: When adding new authenticator options
*/

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::LedgerKind;

/// Maximum age of a challenge before it is rejected as expired (5 minutes)
pub const DEFAULT_FRESHNESS_WINDOW_MS: u64 = 5 * 60 * 1000;

/// Ledger size above which the oldest half of the nonces is evicted
pub const DEFAULT_LEDGER_CAPACITY: usize = 1000;

/// Authenticator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Freshness window in milliseconds
    #[serde(default = "default_freshness_window_ms")]
    pub freshness_window_ms: u64,
    /// Capacity of the bounded in-memory ledger
    #[serde(default = "default_ledger_capacity")]
    pub ledger_capacity: usize,
    /// Ledger backend
    #[serde(default)]
    pub ledger: LedgerKind,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            freshness_window_ms: default_freshness_window_ms(),
            ledger_capacity: default_ledger_capacity(),
            ledger: LedgerKind::default(),
        }
    }
}

impl AuthConfig {
    pub fn freshness_window(&self) -> Duration {
        Duration::from_millis(self.freshness_window_ms)
    }
}

fn default_freshness_window_ms() -> u64 {
    DEFAULT_FRESHNESS_WINDOW_MS
}

fn default_ledger_capacity() -> usize {
    DEFAULT_LEDGER_CAPACITY
}
