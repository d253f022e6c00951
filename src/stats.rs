//! Best-effort introspection of shard load.

/// Entry counts for a [`ShardedMap`](crate::ShardedMap).
///
/// Collected one shard read lock at a time, so the numbers describe each
/// shard at the moment it was counted, not the whole map at one instant.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total entries across all shards at collection time.
    pub size: usize,
    /// Entries per shard, indexed by shard number.
    pub shard_sizes: Vec<usize>,
}

impl Stats {
    /// Ratio of the most loaded shard to the average shard load.
    ///
    /// Values well above 1.0 suggest the routing hasher is clustering keys.
    /// Returns 0.0 for an empty map.
    pub fn max_load_ratio(&self) -> f64 {
        if self.size == 0 || self.shard_sizes.is_empty() {
            return 0.0;
        }
        let avg = self.size as f64 / self.shard_sizes.len() as f64;
        let max = self.shard_sizes.iter().copied().max().unwrap_or(0);
        max as f64 / avg
    }
}
