//! Error types for ShardKV
//!
//! Data operations on the store are infallible; errors only arise while
//! validating construction parameters.

use thiserror::Error;

/// Result type alias using ShardError
pub type Result<T> = std::result::Result<T, ShardError>;

/// Unified error type for ShardKV
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShardError {
    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("shard count must be at least 1, got {0}")]
    InvalidShardCount(usize),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
