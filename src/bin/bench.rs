//! ShardKV Load Generator
//!
//! Drives a store from many threads and reports throughput.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use clap::Parser;
use shardkv::{Config, ShardError, ShardedStore};
use tracing_subscriber::{fmt, EnvFilter};

/// ShardKV load generator
#[derive(Parser, Debug)]
#[command(name = "shardkv-bench")]
#[command(about = "Concurrent load generator for the ShardKV store")]
#[command(version)]
struct Args {
    /// Number of shards
    #[arg(short, long, default_value = "64")]
    shards: usize,

    /// Worker threads issuing mixed reads and writes
    #[arg(short, long, default_value = "8")]
    threads: usize,

    /// Operations per worker thread
    #[arg(short, long, default_value = "100000")]
    ops: u64,

    /// Number of distinct keys
    #[arg(short, long, default_value = "10000")]
    key_space: u64,

    /// Percentage of operations that are reads (0-100)
    #[arg(short, long, default_value = "95")]
    read_ratio: u64,

    /// Extra threads deleting disjoint key ranges
    #[arg(short, long, default_value = "0")]
    deleters: u64,
}

impl Args {
    fn validate(&self) -> shardkv::Result<()> {
        if self.read_ratio > 100 {
            return Err(ShardError::Config(format!(
                "read ratio must be 0-100, got {}",
                self.read_ratio
            )));
        }
        if self.key_space == 0 {
            return Err(ShardError::Config("key space must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shardkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("ShardKV load generator v{}", shardkv::VERSION);

    if let Err(e) = run(&args) {
        tracing::error!("Benchmark failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> shardkv::Result<()> {
    args.validate()?;

    let config = Config::builder()
        .shard_count(args.shards)
        .shard_capacity((args.key_space as usize / args.shards.max(1)) + 1)
        .build();
    let store: ShardedStore<u64, u64> = ShardedStore::with_config(config)?;

    for key in 0..args.key_space {
        store.set(key, key);
    }
    tracing::info!(keys = args.key_space, shards = args.shards, "prepopulated store");

    let reads = AtomicU64::new(0);
    let hits = AtomicU64::new(0);
    let writes = AtomicU64::new(0);
    let deletes = AtomicU64::new(0);

    let start = Instant::now();

    crossbeam::scope(|s| {
        for worker in 0..args.threads as u64 {
            let store = &store;
            let (reads, hits, writes) = (&reads, &hits, &writes);
            s.spawn(move |_| {
                let offset = worker * args.ops;
                for i in 0..args.ops {
                    let key = (offset + i) % args.key_space;
                    if i % 100 < args.read_ratio {
                        if store.get(&key).is_some() {
                            hits.fetch_add(1, Ordering::Relaxed);
                        }
                        reads.fetch_add(1, Ordering::Relaxed);
                    } else {
                        store.set(key, offset + i);
                        writes.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }

        // Each deleter owns a disjoint slice of the key space
        let slice = args.key_space / args.deleters.max(1);
        for deleter in 0..args.deleters {
            let store = &store;
            let deletes = &deletes;
            s.spawn(move |_| {
                let base = deleter * slice;
                for key in base..base + slice {
                    store.delete(&key);
                    deletes.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    })
    .map_err(|_| ShardError::Config("worker thread panicked".to_string()))?;

    let elapsed = start.elapsed();
    let reads = reads.into_inner();
    let writes = writes.into_inner();
    let deletes = deletes.into_inner();
    let total = reads + writes + deletes;
    let ops_per_sec = total as f64 / elapsed.as_secs_f64().max(f64::EPSILON);

    tracing::info!(
        total,
        reads,
        hits = hits.into_inner(),
        writes,
        deletes,
        elapsed_ms = elapsed.as_millis() as u64,
        ops_per_sec = ops_per_sec as u64,
        "workload finished"
    );

    let occupancy: Vec<usize> = (0..store.shard_count())
        .filter_map(|i| store.shard_len(i))
        .collect();
    let min = occupancy.iter().copied().min().unwrap_or(0);
    let max = occupancy.iter().copied().max().unwrap_or(0);

    tracing::info!(
        keys = store.keys().len(),
        shard_min = min,
        shard_max = max,
        "final store state"
    );

    Ok(())
}
