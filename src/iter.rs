use crate::shard::Shard;
use std::hash::Hash;
use std::sync::Arc;

/// An immutable (key, value) pair produced by snapshot iteration.
#[derive(Debug)]
pub struct Entry<K, V> {
    /// The entry's key, cloned out of the map at snapshot time.
    pub key: K,
    /// The entry's value, shared with the map via `Arc`.
    pub value: Arc<V>,
}

impl<K: Clone, V> Clone for Entry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// Streaming snapshot over a sharded map's entries.
///
/// Construction locks, copies, and unlocks one shard at a time, so no lock
/// is held while the caller iterates and no two shard locks are ever held
/// together. The price is that the snapshot is not atomic across shard
/// boundaries: shards copied early may have changed by the time later
/// shards are read. For a single-instant view use
/// [`ShardedMap::keys`](crate::ShardedMap::keys) instead.
pub struct SnapshotIter<K, V> {
    entries: Vec<Entry<K, V>>,
    index: usize,
}

impl<K, V> SnapshotIter<K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
    pub(crate) fn new(shards: &[Shard<K, V>]) -> Self {
        let mut entries = Vec::new();
        for shard in shards {
            let guard = shard.read_lock();
            for (key, value) in guard.iter() {
                entries.push(Entry {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
            // guard drops here, before the next shard is locked
        }
        Self { entries, index: 0 }
    }
}

impl<K, V> Iterator for SnapshotIter<K, V>
where
    K: Clone,
{
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for SnapshotIter<K, V> where K: Clone {}
