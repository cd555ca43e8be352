//! Configuration for ShardKV
//!
//! Construction parameters for a [`ShardedStore`](crate::ShardedStore).

use crate::error::{Result, ShardError};

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of independently locked shards. Fixed for the store's lifetime.
    pub shard_count: usize,

    /// Initial capacity reserved in every shard's map
    pub shard_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: 16,
            shard_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the construction preconditions
    pub fn validate(&self) -> Result<()> {
        if self.shard_count < 1 {
            return Err(ShardError::InvalidShardCount(self.shard_count));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of shards
    pub fn shard_count(mut self, count: usize) -> Self {
        self.config.shard_count = count;
        self
    }

    /// Set the capacity pre-allocated per shard
    pub fn shard_capacity(mut self, capacity: usize) -> Self {
        self.config.shard_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
