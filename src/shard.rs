use hashbrown::HashMap;
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// A single shard: a HashMap protected by its own read-write lock.
///
/// The backing map is owned exclusively by the lock; nothing outside this
/// type touches it without holding a guard, and every guard is released by
/// scope on all exit paths.
pub(crate) struct Shard<K, V> {
    map: RwLock<HashMap<K, Arc<V>>>,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    pub fn new(capacity: Option<usize>) -> Self {
        let map = match capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };
        Self {
            map: RwLock::new(map),
        }
    }

    /// Insert or overwrite, returning the previous value if any.
    pub fn set(&self, key: K, value: V) -> Option<Arc<V>> {
        let mut map = self.map.write();
        map.insert(key, Arc::new(value))
    }

    /// Insert only if the key is absent. Check and insert happen under a
    /// single write-lock acquisition.
    pub fn set_if_absent(&self, key: K, value: V) -> bool {
        let mut map = self.map.write();
        if map.contains_key(&key) {
            return false;
        }
        map.insert(key, Arc::new(value));
        true
    }

    /// Overwrite only if the key is present. Check and insert happen under a
    /// single write-lock acquisition.
    pub fn set_if_present(&self, key: K, value: V) -> bool {
        let mut map = self.map.write();
        if !map.contains_key(&key) {
            return false;
        }
        map.insert(key, Arc::new(value));
        true
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.map.read().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.read().contains_key(key)
    }

    /// Remove the key, reporting whether it was present.
    pub fn delete(&self, key: &K) -> bool {
        let mut map = self.map.write();
        map.remove(key).is_some()
    }

    /// Atomic fetch-and-delete.
    pub fn pop(&self, key: &K) -> Option<Arc<V>> {
        let mut map = self.map.write();
        map.remove(key)
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Expose a read guard for multi-shard operations (`mget`, `keys`) and
    /// snapshot iteration. Callers must follow the ascending-index lock
    /// order when holding more than one guard at a time.
    pub fn read_lock(&self) -> parking_lot::RwLockReadGuard<'_, HashMap<K, Arc<V>>> {
        self.map.read()
    }
}
