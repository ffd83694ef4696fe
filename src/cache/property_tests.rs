//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, eviction order and freshness invariants.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::thread::sleep;
use std::time::Duration;

use crate::cache::TimedCache;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys from a small alphabet so overwrites happen often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Size never exceeds capacity after any sequence of operations.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..10,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = TimedCache::new(capacity, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value),
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Remove { key } => { cache.remove(&key); }
            }
            prop_assert!(cache.len() <= capacity, "len {} > capacity {}", cache.len(), capacity);
        }
    }

    // The cache behaves like a FIFO model: inserting a new key at capacity
    // evicts exactly the earliest inserted surviving key, and reads never
    // change that order.
    #[test]
    fn prop_matches_fifo_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = TimedCache::new(capacity, TEST_TTL);
        let mut model_order: VecDeque<String> = VecDeque::new();
        let mut model_values: HashMap<String, u32> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    if !model_values.contains_key(&key) {
                        if model_values.len() >= capacity {
                            let oldest = model_order.pop_front().unwrap();
                            model_values.remove(&oldest);
                        }
                        model_order.push_back(key.clone());
                    }
                    model_values.insert(key.clone(), value);
                    cache.set(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model_values.get(&key).copied());
                }
                CacheOp::Remove { key } => {
                    let expected = model_values.remove(&key).is_some();
                    model_order.retain(|k| k != &key);
                    prop_assert_eq!(cache.remove(&key), expected);
                }
            }
        }

        prop_assert_eq!(cache.len(), model_values.len());
        for (key, value) in &model_values {
            prop_assert_eq!(cache.get(key), Some(*value));
        }
    }

    // Filling a full cache with one more new key evicts the earliest key only.
    #[test]
    fn prop_overflow_evicts_earliest(
        keys in prop::collection::hash_set(0u32..1000, 2..20),
        extra in 1000u32..2000
    ) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut cache = TimedCache::new(keys.len(), TEST_TTL);

        for key in &keys {
            cache.set(*key, *key);
        }
        cache.set(extra, extra);

        prop_assert_eq!(cache.len(), keys.len());
        prop_assert_eq!(cache.get(&keys[0]), None);
        for key in &keys[1..] {
            prop_assert_eq!(cache.get(key), Some(*key));
        }
        prop_assert_eq!(cache.get(&extra), Some(extra));
    }
}

// TTL property uses real sleeps, so it runs with few cases.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Every entry reads as absent once its age exceeds the TTL.
    #[test]
    fn prop_ttl_expiration_behavior(keys in prop::collection::hash_set("[a-z]{1,8}", 1..10)) {
        let mut cache = TimedCache::new(64, Duration::from_millis(20));

        for key in &keys {
            cache.set(key.clone(), key.len());
        }
        for key in &keys {
            prop_assert_eq!(cache.get(key), Some(key.len()));
        }

        sleep(Duration::from_millis(40));

        for key in &keys {
            prop_assert_eq!(cache.get(key), None);
        }
        prop_assert!(cache.is_empty());
    }
}
