use crate::hash::KeyHashFn;
use crate::map::ShardedMap;
use std::hash::Hash;

/// Builder for a [`ShardedMap`].
///
/// The routing hasher is the one required setting: building without one is a
/// configuration error and panics. A shard count of zero is substituted with
/// [`DEFAULT_SHARDS`](crate::DEFAULT_SHARDS).
///
/// # Example
///
/// ```rust
/// use synckit::{ShardedMapBuilder, auto_hasher};
///
/// let map = ShardedMapBuilder::new()
///     .shard_count(32)
///     .hasher(auto_hasher())
///     .build::<u64>();
///
/// map.set(7u32, 700u64);
/// assert!(map.contains(&7));
/// ```
pub struct ShardedMapBuilder<K> {
    shard_count: usize,
    hasher: Option<KeyHashFn<K>>,
    capacity_per_shard: Option<usize>,
}

impl<K> ShardedMapBuilder<K> {
    /// Create a builder with the default shard count and no hasher.
    pub fn new() -> Self {
        Self {
            shard_count: crate::map::DEFAULT_SHARDS,
            hasher: None,
            capacity_per_shard: None,
        }
    }

    /// Set the number of shards. Zero falls back to the default.
    pub fn shard_count(mut self, count: usize) -> Self {
        self.shard_count = count;
        self
    }

    /// Set the routing hasher. Required.
    pub fn hasher(mut self, hasher: KeyHashFn<K>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Pre-allocate each shard's backing map. Total capacity is roughly
    /// `capacity * shard_count`.
    pub fn capacity_per_shard(mut self, capacity: usize) -> Self {
        self.capacity_per_shard = Some(capacity);
        self
    }

    /// Build the map.
    ///
    /// # Panics
    ///
    /// Panics if no hasher was supplied. An absent hasher is a misconfigured
    /// call site, not a recoverable condition.
    pub fn build<V>(self) -> ShardedMap<K, V>
    where
        K: Hash + Eq + Send + Sync,
        V: Send + Sync,
    {
        let hasher = self
            .hasher
            .expect("illegal use of API: ShardedMap requires a key hasher");
        ShardedMap::with_options(self.shard_count, hasher, self.capacity_per_shard)
    }
}

impl<K> Default for ShardedMapBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
