//! Store Module
//!
//! The sharded key-value store.
//!
//! ## Responsibilities
//! - Own a fixed set of shards, created once
//! - Route every key to exactly one shard
//! - Run each operation under that shard's lock only
//! - Assemble whole-store views shard by shard

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Result;
use crate::router::Router;
use crate::shard::Shard;

/// Concurrent key-value store over independently locked shards
///
/// ## Concurrency Model
///
/// - **Reads** (`get`, `contains_key`): shared lock on the owning shard only.
///   Readers on the same shard run in parallel.
/// - **Writes** (`set`, `delete`): exclusive lock on the owning shard only.
///   Writers on different shards run in parallel; writers on the same shard
///   serialize.
/// - **Scans** (`keys`, `len`): visit shards in index order, releasing each
///   shard's lock before taking the next. No call ever holds two shard locks.
///
/// Share across threads with `Arc<ShardedStore<K, V>>`.
#[derive(Debug)]
pub struct ShardedStore<K, V> {
    /// Fixed-length shard set, index = router output
    shards: Box<[Shard<K, V>]>,

    /// Key → shard index mapping
    router: Router,
}

impl<K, V> ShardedStore<K, V>
where
    K: Hash + Eq,
{
    /// Create a store with `shard_count` empty shards
    ///
    /// # Panics
    /// If `shard_count` is zero. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    pub fn new(shard_count: usize) -> Self {
        match Self::try_new(shard_count) {
            Ok(store) => store,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a store with `shard_count` empty shards, rejecting zero
    pub fn try_new(shard_count: usize) -> Result<Self> {
        Self::with_config(Config::builder().shard_count(shard_count).build())
    }

    /// Create a store from a config
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let shards: Box<[Shard<K, V>]> = (0..config.shard_count)
            .map(|_| Shard::with_capacity(config.shard_capacity))
            .collect();

        debug!(
            shard_count = config.shard_count,
            shard_capacity = config.shard_capacity,
            "created sharded store"
        );

        Ok(Self {
            shards,
            router: Router::new(config.shard_count),
        })
    }

    /// Get a copy of the value for a key
    ///
    /// Returns `None` if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.shard(key).get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard(key).contains_key(key)
    }

    /// Insert or overwrite a key
    ///
    /// Visible to every `get` issued after this returns. The previous value,
    /// if any, is handed back.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        self.shard(&key).insert(key, value)
    }

    /// Remove a key
    ///
    /// Deleting an absent key is a no-op, so repeated deletes are safe.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard(key).remove(key)
    }

    /// Collect every key, in no particular order
    ///
    /// ## Consistency
    /// This is NOT an atomic snapshot of the whole store. Shards are scanned
    /// one at a time, each under its own read lock:
    /// - each shard's keys reflect that shard at the moment it was scanned
    /// - a key inserted into an already-scanned shard during the call is missed
    /// - a key deleted from a not-yet-scanned shard during the call is omitted
    /// - a key present for the whole call appears exactly once
    ///
    /// Without concurrent writers the result is exactly the stored key set.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        // Pre-size from a first pass; the count may be stale by the second.
        let mut keys = Vec::with_capacity(self.len());

        for shard in self.shards.iter() {
            shard.copy_keys_into(&mut keys);
        }

        trace!(
            shard_count = self.shards.len(),
            key_count = keys.len(),
            "collected keys"
        );
        keys
    }
}

impl<K, V> ShardedStore<K, V> {
    /// Total entry count, summed shard by shard
    ///
    /// Same relaxed consistency as [`keys`](ShardedStore::keys).
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    /// Number of shards, fixed at construction
    pub fn shard_count(&self) -> usize {
        self.router.shard_count()
    }

    /// Index of the shard that owns `key`
    pub fn shard_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        self.router.shard_for(key)
    }

    /// Entry count of one shard, or `None` if `index` is out of range
    pub fn shard_len(&self, index: usize) -> Option<usize> {
        self.shards.get(index).map(Shard::len)
    }

    #[inline]
    fn shard<Q>(&self, key: &Q) -> &Shard<K, V>
    where
        Q: Hash + ?Sized,
    {
        &self.shards[self.router.shard_for(key)]
    }
}

impl<K, V> Default for ShardedStore<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        let config = Config::default();
        let shards = (0..config.shard_count).map(|_| Shard::new()).collect();
        Self {
            shards,
            router: Router::new(config.shard_count),
        }
    }
}
