//! Insertion Order Module
//!
//! Tracks first-insertion order of cache keys for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks the order in which keys were first inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Earliest inserted
/// - Back = Most recently inserted
///
/// Reads never reorder keys, and overwriting an existing key keeps its
/// original position.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    order: VecDeque<K>,
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: PartialEq + Clone> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Appends a newly inserted key. Keys already tracked keep their place.
    pub fn record(&mut self, key: &K) {
        if !self.contains(key) {
            self.order.push_back(key.clone());
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the earliest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
