//! Shard implementation
//!
//! One partition of the keyspace: a HashMap behind its own RwLock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

/// A single independently locked partition
///
/// ## Locking
/// - Reads (`get`, `contains_key`, `len`, key copies) take the lock shared
/// - Writes (`insert`, `remove`) take the lock exclusive
/// - Every guard is dropped before the method returns
#[derive(Debug)]
pub struct Shard<K, V> {
    data: RwLock<HashMap<K, V>>,
}

impl<K, V> Shard<K, V> {
    /// Create an empty shard
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty shard with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Number of entries (read lock)
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq,
{
    /// Clone out the value for a key (read lock)
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.data.read().get(key).cloned()
    }

    /// Check for a key without cloning its value (read lock)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.read().contains_key(key)
    }

    /// Insert or overwrite (write lock), returning the previous value
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.data.write().insert(key, value)
    }

    /// Remove a key if present (write lock)
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.write().remove(key)
    }

    /// Append a copy of every key to `out` under one read lock
    ///
    /// Returns how many keys were appended.
    pub fn copy_keys_into(&self, out: &mut Vec<K>) -> usize
    where
        K: Clone,
    {
        let data = self.data.read();
        out.extend(data.keys().cloned());
        data.len()
    }
}

impl<K, V> Default for Shard<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
