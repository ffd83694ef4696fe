//! Timed Cache Module
//!
//! Bounded key/value store whose entries expire a fixed time after storage.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == Timed Cache ==
/// Bounded, time-expiring cache with FIFO eviction.
///
/// Expiry is checked lazily on read only; there is no background sweep. An
/// expired entry that is never read again keeps occupying a slot until it
/// becomes the oldest insertion and is evicted, or until `clear` runs.
#[derive(Debug)]
pub struct TimedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// First-insertion order, used as eviction order
    order: InsertionOrder<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Freshness window for every entry
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new TimedCache with the given capacity and TTL.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    // == Set ==
    /// Stores a value, stamping it with the current time.
    ///
    /// Overwriting an existing key refreshes its timestamp but keeps its
    /// eviction position. A new key arriving at capacity first evicts the
    /// earliest inserted entry.
    pub fn set(&mut self, key: K, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.order.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.order.record(&key);
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a fresh value by key.
    ///
    /// Returns None if the key was never stored or its entry has outlived the
    /// TTL; an expired entry is removed as a side effect.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Remove ==
    /// Removes an entry by key, returning whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns true if `key` is stored, without checking freshness.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries, expired-but-unread ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
