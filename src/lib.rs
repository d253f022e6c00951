//! # synckit
//!
//! Two concurrency-bearing collections: a sharded key/value map and a
//! bounded blocking queue.
//!
//! [`ShardedMap`] partitions keys across independently-locked shards, so
//! operations on keys in different shards never block each other. Routing
//! is a caller-supplied hash function, fixed for the lifetime of the map.
//! Values are stored behind `Arc<T>` for zero-copy reads.
//!
//! [`BoundedQueue`] is a fixed-capacity FIFO handoff with backpressure:
//! producers block (or fail fast) once the queue is full, consumers block
//! while it is empty. Blocking operations take a [`Wait`] bounding them by
//! a deadline or an explicit cancel signal.
//!
//! ## Example
//!
//! ```rust
//! use synckit::{BoundedQueue, ShardedMap, Wait, string_hasher};
//!
//! let map = ShardedMap::new(16, string_hasher());
//! map.set("key1".to_string(), 1);
//! map.set("key2".to_string(), 2);
//!
//! assert_eq!(map.mget(&["key1".to_string(), "missing".to_string()]).len(), 1);
//!
//! for entry in map.snapshot() {
//!     println!("{}: {}", entry.key, *entry.value);
//! }
//!
//! let queue = BoundedQueue::new(8);
//! queue.offer(&Wait::forever(), "job").unwrap();
//! assert_eq!(queue.poll(&Wait::forever()).unwrap(), "job");
//! ```
//!
//! ## Consistency model
//!
//! Per shard, the lock totally orders all operations touching that shard.
//! Across shards, [`ShardedMap::mget`] and [`ShardedMap::keys`] lock every
//! shard at once and are atomic snapshots; [`ShardedMap::size`] and
//! [`ShardedMap::snapshot`] visit shards one at a time and are explicitly
//! best-effort. The queue's size accessors carry the same caveat.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Builder for configuring a map.
pub mod config;
/// Error types for cancellable waits.
pub mod error;
/// Key hashing: the routing function type and stock hashers.
pub mod hash;
/// Snapshot iteration over map entries.
pub mod iter;
/// The sharded map.
pub mod map;
/// The bounded blocking queue.
pub mod queue;
/// Internal shard implementation.
mod shard;
/// Best-effort shard-load introspection.
pub mod stats;
/// Wait bounds and cancellation for blocking queue operations.
pub mod wait;

pub use config::ShardedMapBuilder;
pub use error::Error;
pub use hash::{auto_hasher, display_hasher, fnv32, string_hasher, KeyHashFn};
pub use iter::{Entry, SnapshotIter};
pub use map::{ShardedMap, DEFAULT_SHARDS};
pub use queue::BoundedQueue;
pub use stats::Stats;
pub use wait::{CancelHandle, Wait};
