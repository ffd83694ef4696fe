//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a storage timestamp.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was stored
    pub stored_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry aged exactly `ttl` is still fresh; it
    /// expires only once the elapsed time strictly exceeds the TTL.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) > ttl
    }

    /// Checks whether the entry is older than `ttl` right now.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Instant::now(), ttl)
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string());

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(42);

        assert!(!entry.is_expired(Duration::from_millis(50)));

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test");
        let ttl = Duration::from_millis(100);

        // Exactly at the TTL the entry is still fresh
        assert!(!entry.is_expired_at(entry.stored_at + ttl, ttl));
        assert!(entry.is_expired_at(entry.stored_at + ttl + Duration::from_millis(1), ttl));
    }

    #[test]
    fn test_age_grows() {
        let entry = CacheEntry::new(());
        sleep(Duration::from_millis(10));
        assert!(entry.age() >= Duration::from_millis(10));
    }
}
