/*
[INPUT]:  Nonces to check or mark as used, per-entry retention
[OUTPUT]: Replay decisions backed by a TTL cache
[POS]:    Ledger layer - time-gated ledger without capacity eviction
[UPDATE]: When changing cache backend or expiry policy
*/

use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;

use crate::ledger::NonceStore;

/// Upper bound on a single entry's retention; longer is treated as forever
const MAX_RETENTION: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Each entry stores its own retention as the cache value
struct RetentionExpiry;

impl Expiry<String, Duration> for RetentionExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        retain_for: &Duration,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(*retain_for)
    }
}

/// Nonce ledger whose entries expire individually.
///
/// `ttl` is the retention used by [`NonceStore::mark_used`] and
/// [`NonceStore::try_consume`]. The authenticator calls
/// [`NonceStore::try_consume_for`] with the time left until the challenge
/// leaves the freshness window, so future-dated challenges keep their nonce
/// for as long as they can still be accepted.
#[derive(Clone)]
pub struct ExpiringNonceLedger {
    cache: Cache<String, Duration>,
    ttl: Duration,
}

impl ExpiringNonceLedger {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder().expire_after(RetentionExpiry).build();
        Self { cache, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for ExpiringNonceLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringNonceLedger")
            .field("ttl", &self.ttl)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl NonceStore for ExpiringNonceLedger {
    fn has_been_used(&self, nonce: &str) -> bool {
        self.cache.contains_key(nonce)
    }

    fn mark_used(&self, nonce: &str) {
        self.cache.insert(nonce.to_string(), self.ttl);
    }

    fn try_consume(&self, nonce: &str) -> bool {
        self.try_consume_for(nonce, self.ttl)
    }

    fn try_consume_for(&self, nonce: &str, retain_for: Duration) -> bool {
        let retain_for = retain_for.max(self.ttl).min(MAX_RETENTION);
        self.cache
            .entry(nonce.to_string())
            .or_insert(retain_for)
            .is_fresh()
    }

    fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }
}
