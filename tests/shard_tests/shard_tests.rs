//! Shard Tests
//!
//! Tests verify:
//! - Insert / get / remove on a single shard
//! - Previous values returned on overwrite and removal
//! - Key copying
//! - Concurrent readers and writers

use std::sync::Arc;
use std::thread;

use shardkv::shard::Shard;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_shard_is_empty() {
    let shard: Shard<String, u32> = Shard::new();
    assert_eq!(shard.len(), 0);
    assert!(shard.is_empty());
}

#[test]
fn test_with_capacity_is_empty() {
    let shard: Shard<u64, u64> = Shard::with_capacity(128);
    assert!(shard.is_empty());
}

#[test]
fn test_insert_and_get() {
    let shard = Shard::new();

    assert_eq!(shard.insert("key1".to_string(), 1), None);

    assert_eq!(shard.get("key1"), Some(1));
    assert!(shard.contains_key("key1"));
    assert_eq!(shard.len(), 1);
}

#[test]
fn test_get_missing_key() {
    let shard: Shard<String, u32> = Shard::new();
    assert_eq!(shard.get("missing"), None);
    assert!(!shard.contains_key("missing"));
}

#[test]
fn test_insert_overwrites() {
    let shard = Shard::new();

    shard.insert(7u64, "first");
    assert_eq!(shard.insert(7u64, "second"), Some("first"));

    assert_eq!(shard.get(&7), Some("second"));
    assert_eq!(shard.len(), 1);
}

#[test]
fn test_remove() {
    let shard = Shard::new();
    shard.insert(1u64, 10u64);

    assert_eq!(shard.remove(&1), Some(10));
    assert_eq!(shard.remove(&1), None);
    assert!(shard.is_empty());
}

#[test]
fn test_copy_keys_into_appends() {
    let shard = Shard::new();
    for i in 0..5u64 {
        shard.insert(i, i * 2);
    }

    let mut out = vec![100u64];
    let copied = shard.copy_keys_into(&mut out);

    assert_eq!(copied, 5);
    assert_eq!(out.len(), 6);
    out.sort();
    assert_eq!(out, vec![0, 1, 2, 3, 4, 100]);
}

// =============================================================================
// Concurrent Access Tests
// =============================================================================

#[test]
fn test_concurrent_reads() {
    let shard = Arc::new(Shard::new());
    shard.insert("key".to_string(), "value".to_string());

    let mut handles = vec![];

    for _ in 0..10 {
        let shard = Arc::clone(&shard);
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                assert_eq!(shard.get("key"), Some("value".to_string()));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_writes() {
    let shard = Arc::new(Shard::new());

    let mut handles = vec![];

    for i in 0..10u64 {
        let shard = Arc::clone(&shard);
        let handle = thread::spawn(move || {
            for j in 0..100u64 {
                shard.insert(i * 100 + j, j);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shard.len(), 1000);
}
