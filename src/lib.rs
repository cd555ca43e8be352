//! # ShardKV
//!
//! A concurrent in-memory key-value store with:
//! - A fixed number of shards, each with its own reader/writer lock
//! - Deterministic FNV-1a routing from key to shard
//! - Shared-lock reads and exclusive-lock writes per shard
//! - Shard-by-shard key scans that never hold two locks at once
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Caller Threads                            │
//! │               (get / set / delete / keys)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Router                                 │
//! │            (FNV-1a hash % shard_count, stateless)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┬────────────┐
//!          ▼            ▼            ▼            ▼
//!   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐
//!   │  Shard 0  │ │  Shard 1  │ │    ...    │ │ Shard N-1 │
//!   │ (RwLock)  │ │ (RwLock)  │ │           │ │ (RwLock)  │
//!   └───────────┘ └───────────┘ └───────────┘ └───────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use shardkv::ShardedStore;
//!
//! let store: ShardedStore<String, u64> = ShardedStore::new(16);
//! store.set("foo".to_string(), 42);
//! assert_eq!(store.get("foo"), Some(42));
//! assert_eq!(store.get("bar"), None);
//! store.delete("foo");
//! assert!(store.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod router;
pub mod shard;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ShardError, Result};
pub use config::{Config, ConfigBuilder};
pub use router::Router;
pub use store::ShardedStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShardKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
