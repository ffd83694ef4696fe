//! Cache Module
//!
//! Bounded, time-expiring in-memory caches with insertion-order eviction.

mod entry;
mod order;
mod stats;
mod timed;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use timed::TimedCache;

use std::time::Duration;

// == Public Constants ==
/// Freshness window shared by every cache (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

/// Capacity of the search page cache
pub const SEARCH_CACHE_CAPACITY: usize = 50;

/// Capacity of the detail and image caches
pub const DETAIL_CACHE_CAPACITY: usize = 100;
