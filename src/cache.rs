// src/cache.rs
//
// Time-to-live cache. Entries are served until they are `ttl` old; expiry is the
// only way out. Callers pass `now` so expiry can be checked without sleeping.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (V, Instant)>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    /// The value for `key` if it was stored less than `ttl` before `now`.
    pub fn get(&self, key: &K, now: Instant) -> Option<&V> {
        let (value, stored) = self.entries.get(key)?;
        let age = now.saturating_duration_since(*stored);
        if age < self.ttl { Some(value) } else { None }
    }

    /// Time left before `key` expires, if it is still fresh.
    pub fn remaining(&self, key: &K, now: Instant) -> Option<Duration> {
        let (_, stored) = self.entries.get(key)?;
        self.ttl.checked_sub(now.saturating_duration_since(*stored)).filter(|d| !d.is_zero())
    }

    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(key, (value, now));
    }

    /// Drop expired entries. Only bounds memory; `get` already ignores them.
    pub fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries.retain(|_, (_, stored)| now.saturating_duration_since(*stored) < ttl);
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
