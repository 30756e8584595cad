/*
[INPUT]:  Nonces to check or mark as used
[OUTPUT]: Replay decisions backed by an insertion-ordered in-memory set
[POS]:    Ledger layer - process-local bounded ledger
[UPDATE]: When changing capacity or eviction policy
*/

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::DEFAULT_LEDGER_CAPACITY;
use crate::ledger::NonceStore;

#[derive(Debug, Default)]
struct Inner {
    seen: HashSet<String>,
    order: VecDeque<String>,
}

/// Thread-safe bounded nonce ledger.
///
/// Once the size exceeds the capacity, the oldest half by insertion order is
/// evicted. Expired challenges are also rejected by the freshness window, so
/// an evicted nonce only matters for messages still inside that window.
#[derive(Debug)]
pub struct InMemoryNonceLedger {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl InMemoryNonceLedger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LEDGER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, inner: &mut Inner, nonce: &str) {
        if inner.seen.insert(nonce.to_string()) {
            inner.order.push_back(nonce.to_string());
        }

        if inner.seen.len() > self.capacity {
            let evict = (self.capacity / 2).max(1);
            for old in inner.order.drain(..evict) {
                inner.seen.remove(&old);
            }
            debug!(
                evicted = evict,
                remaining = inner.seen.len(),
                "nonce ledger evicted oldest entries"
            );
        }
    }
}

impl Default for InMemoryNonceLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceStore for InMemoryNonceLedger {
    fn has_been_used(&self, nonce: &str) -> bool {
        self.lock().seen.contains(nonce)
    }

    fn mark_used(&self, nonce: &str) {
        let mut inner = self.lock();
        self.insert(&mut inner, nonce);
    }

    fn try_consume(&self, nonce: &str) -> bool {
        let mut inner = self.lock();
        if inner.seen.contains(nonce) {
            return false;
        }
        self.insert(&mut inner, nonce);
        true
    }

    fn clear(&self) {
        let mut inner = self.lock();
        inner.seen.clear();
        inner.order.clear();
    }

    fn len(&self) -> usize {
        self.lock().seen.len()
    }
}
