//! Router Module
//!
//! Maps keys to shard indices.
//!
//! ## Scheme
//! ```text
//!   key ──Hash──► FNV-1a (64 bit) ──► hash % shard_count ──► shard index
//! ```
//!
//! The router holds only the shard count, which never changes, so it is
//! `Copy` and needs no locking. Bytes fed to the hasher come from the key's
//! `Hash` impl: integers contribute their fixed-width bytes, strings their
//! content bytes plus a terminator. Equal keys therefore always land on the
//! same shard, and a `String` key routes the same as its `&str` borrow.

use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

/// Stateless key → shard mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    shard_count: usize,
}

impl Router {
    /// Create a router over `shard_count` shards
    ///
    /// # Panics
    /// If `shard_count` is zero.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count >= 1, "shard count must be at least 1, got {shard_count}");
        Self { shard_count }
    }

    /// Number of shards this router distributes over
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    /// 64-bit FNV-1a hash of a key
    #[inline]
    pub fn hash_key<Q>(key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = FnvHasher::default();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Shard index for a key, always in `[0, shard_count)`
    #[inline]
    pub fn shard_for<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (Self::hash_key(key) % self.shard_count as u64) as usize
    }
}
