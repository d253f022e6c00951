use crate::hash::KeyHashFn;
use crate::iter::SnapshotIter;
use crate::shard::Shard;
use crate::stats::Stats;
use std::hash::Hash;
use std::sync::Arc;

/// Shard count used when the caller asks for zero shards.
pub const DEFAULT_SHARDS: usize = 16;

/// Thread-safe sharded map.
///
/// Keys are partitioned across a fixed set of shards, each guarded by its
/// own read-write lock, so operations on keys in different shards never
/// block each other. A key's shard is `hash(key) % shard_count` and never
/// changes for the lifetime of the map.
///
/// Values are stored behind `Arc<V>`, so reads hand out cheap shared
/// references instead of copying.
///
/// # Consistency
///
/// Single-key operations are linearized by their shard's lock. [`mget`] and
/// [`keys`] lock every shard at once and are atomic snapshots across the
/// whole map. [`size`] and [`snapshot`] visit shards one at a time and are
/// explicitly best-effort: earlier shards may change while later ones are
/// read.
///
/// [`mget`]: ShardedMap::mget
/// [`keys`]: ShardedMap::keys
/// [`size`]: ShardedMap::size
/// [`snapshot`]: ShardedMap::snapshot
///
/// # Example
///
/// ```rust
/// use synckit::{ShardedMap, string_hasher};
///
/// let map = ShardedMap::new(16, string_hasher());
/// map.set("hello".to_string(), "world");
///
/// if let Some(value) = map.get(&"hello".to_string()) {
///     assert_eq!(*value, "world");
/// }
/// assert!(map.contains(&"hello".to_string()));
/// ```
pub struct ShardedMap<K, V> {
    shards: Vec<Shard<K, V>>,
    hasher: KeyHashFn<K>,
    shard_count: usize,
}

impl<K, V> ShardedMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    /// Create a map with the given shard count and routing hasher.
    ///
    /// A `shard_count` of zero silently falls back to [`DEFAULT_SHARDS`].
    /// The hasher must be deterministic; see [`KeyHashFn`].
    pub fn new(shard_count: usize, hasher: KeyHashFn<K>) -> Self {
        Self::with_options(shard_count, hasher, None)
    }

    pub(crate) fn with_options(
        shard_count: usize,
        hasher: KeyHashFn<K>,
        capacity_per_shard: Option<usize>,
    ) -> Self {
        let shard_count = if shard_count == 0 {
            DEFAULT_SHARDS
        } else {
            shard_count
        };
        let mut shards = Vec::with_capacity(shard_count);
        for _ in 0..shard_count {
            shards.push(Shard::new(capacity_per_shard));
        }
        Self {
            shards,
            hasher,
            shard_count,
        }
    }

    /// Which shard owns this key. Stable for the lifetime of the map.
    #[inline]
    fn shard_index(&self, key: &K) -> usize {
        (self.hasher)(key) as usize % self.shard_count
    }

    /// The number of shards this map was built with.
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    /// Look up a key. `None` means the key is absent.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.shards[self.shard_index(key)].get(key)
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.shards[self.shard_index(key)].contains(key)
    }

    /// Insert or overwrite the value for a key, returning the previous
    /// value if the key existed.
    pub fn set(&self, key: K, value: V) -> Option<Arc<V>> {
        self.shards[self.shard_index(&key)].set(key, value)
    }

    /// Insert-only write: stores the value and returns `true` only if the
    /// key was absent.
    ///
    /// The presence check and the store happen under one lock acquisition,
    /// so concurrent racers on the same key see exactly one winner.
    pub fn set_if_absent(&self, key: K, value: V) -> bool {
        self.shards[self.shard_index(&key)].set_if_absent(key, value)
    }

    /// Update-only write: stores the value and returns `true` only if the
    /// key was already present. Atomic like [`set_if_absent`](Self::set_if_absent).
    pub fn set_if_present(&self, key: K, value: V) -> bool {
        self.shards[self.shard_index(&key)].set_if_present(key, value)
    }

    /// Remove a key, reporting whether it was present.
    pub fn delete(&self, key: &K) -> bool {
        self.shards[self.shard_index(key)].delete(key)
    }

    /// Atomically fetch and delete a key, returning the removed value.
    pub fn pop(&self, key: &K) -> Option<Arc<V>> {
        self.shards[self.shard_index(key)].pop(key)
    }

    /// Fetch several keys in one atomic snapshot.
    ///
    /// Every shard is read-locked in ascending index order before any key is
    /// looked up, so the result reflects a single instant of the whole map.
    /// Found values keep the relative order of the input keys; missing keys
    /// are silently omitted. Blocks all writers for the duration, so prefer
    /// [`get`](Self::get) when a per-key view is enough.
    pub fn mget(&self, keys: &[K]) -> Vec<Arc<V>> {
        // Ascending acquisition order; any other multi-lock operation uses
        // the same order, so the locks can never form a cycle.
        let guards: Vec<_> = self.shards.iter().map(|shard| shard.read_lock()).collect();
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = guards[self.shard_index(key)].get(key) {
                values.push(value.clone());
            }
        }
        values
    }

    /// Apply [`set`](Self::set) for every pair in the batch.
    ///
    /// Each key's write is independently atomic but the batch as a whole is
    /// not: concurrent readers may observe a partially-applied batch.
    pub fn mset<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Every key present at a single instant.
    ///
    /// Uses the same lock-all-ascending discipline as [`mget`](Self::mget),
    /// so the result is an exact snapshot, not an approximation. Expensive
    /// under write load; not recommended on hot paths.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let guards: Vec<_> = self.shards.iter().map(|shard| shard.read_lock()).collect();
        let mut keys = Vec::new();
        for guard in &guards {
            keys.extend(guard.keys().cloned());
        }
        keys
    }

    /// Approximate number of entries.
    ///
    /// Each shard is counted under its own read lock, released before the
    /// next shard is counted, so shards counted early may change before the
    /// sum is returned. Best-effort statistic, not a linearizable read.
    pub fn size(&self) -> usize {
        self.shards.iter().map(|shard| shard.len()).sum()
    }

    /// Whether the map looks empty. Same per-shard caveat as [`size`](Self::size).
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.is_empty())
    }

    /// Best-effort totals and per-shard entry counts.
    pub fn stats(&self) -> Stats {
        let shard_sizes: Vec<usize> = self.shards.iter().map(|shard| shard.len()).collect();
        let size = shard_sizes.iter().sum();
        Stats { size, shard_sizes }
    }

    /// A materialized, position-stable cursor over the map's entries.
    ///
    /// Each shard is read-locked, copied, and unlocked in turn, so the
    /// combined snapshot is *not* atomic across shard boundaries: a shard
    /// already copied may change while later shards are still being read.
    /// This is deliberately weaker (and cheaper under write load) than
    /// [`keys`](Self::keys)/[`mget`](Self::mget); use those when a single
    /// consistent instant matters.
    pub fn snapshot(&self) -> SnapshotIter<K, V>
    where
        K: Clone,
    {
        SnapshotIter::new(&self.shards)
    }
}
