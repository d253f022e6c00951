use synckit::{display_hasher, string_hasher, ShardedMap, DEFAULT_SHARDS};

fn new_map<V: Send + Sync>() -> ShardedMap<String, V> {
    ShardedMap::new(DEFAULT_SHARDS, string_hasher())
}

#[test]
fn test_set_get_roundtrip() {
    let map = new_map();

    map.set("hello".to_string(), "world");
    assert_eq!(*map.get(&"hello".to_string()).unwrap(), "world");

    // Overwrite returns the previous value.
    let previous = map.set("hello".to_string(), "there").unwrap();
    assert_eq!(*previous, "world");
    assert_eq!(*map.get(&"hello".to_string()).unwrap(), "there");
}

#[test]
fn test_get_missing_key() {
    let map = new_map::<i32>();
    assert!(map.get(&"test".to_string()).is_none());
    assert!(!map.contains(&"test".to_string()));
}

#[test]
fn test_set_if_absent() {
    let map = new_map();

    assert!(map.set_if_absent("k".to_string(), 1));
    assert!(!map.set_if_absent("k".to_string(), 2));

    // The losing call must not have overwritten the stored value.
    assert_eq!(*map.get(&"k".to_string()).unwrap(), 1);
}

#[test]
fn test_set_if_present() {
    let map = new_map();

    assert!(!map.set_if_present("absent".to_string(), 1));
    assert!(!map.contains(&"absent".to_string()));

    map.set("present".to_string(), 1);
    assert!(map.set_if_present("present".to_string(), 2));
    assert_eq!(*map.get(&"present".to_string()).unwrap(), 2);
}

#[test]
fn test_delete() {
    let map = new_map();

    map.set("k".to_string(), 1);
    assert!(map.delete(&"k".to_string()));
    assert!(!map.contains(&"k".to_string()));

    // Deleting an absent key reports not-found, not an error.
    assert!(!map.delete(&"k".to_string()));
}

#[test]
fn test_pop() {
    let map = new_map();

    map.set("k".to_string(), 41);
    let popped = map.pop(&"k".to_string()).unwrap();
    assert_eq!(*popped, 41);
    assert!(!map.contains(&"k".to_string()));
    assert!(map.pop(&"k".to_string()).is_none());
}

#[test]
fn test_mget_preserves_input_order_and_omits_missing() {
    let map = new_map();
    map.set("a".to_string(), 1);
    map.set("b".to_string(), 2);

    let values = map.mget(&["a".to_string(), "z".to_string(), "b".to_string()]);
    let values: Vec<i32> = values.iter().map(|v| **v).collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_mget_empty_and_all_missing() {
    let map = new_map::<i32>();
    assert!(map.mget(&[]).is_empty());
    assert!(map.mget(&["x".to_string(), "y".to_string()]).is_empty());
}

#[test]
fn test_mset() {
    let map = new_map();

    map.mset(vec![
        ("a".to_string(), 1),
        ("b".to_string(), 2),
        ("c".to_string(), 3),
    ]);

    assert_eq!(map.size(), 3);
    assert_eq!(*map.get(&"b".to_string()).unwrap(), 2);
}

#[test]
fn test_keys_exact_snapshot() {
    let map = new_map();
    for i in 0..20 {
        map.set(format!("key_{}", i), i);
    }

    let mut keys = map.keys();
    keys.sort();
    assert_eq!(keys.len(), 20);
    for i in 0..20 {
        assert!(keys.binary_search(&format!("key_{}", i)).is_ok());
    }
}

#[test]
fn test_size_counts_distinct_sets() {
    let map = new_map();
    assert_eq!(map.size(), 0);
    assert!(map.is_empty());

    for i in 0..50 {
        map.set(format!("key_{}", i), i);
    }
    assert_eq!(map.size(), 50);
    assert!(!map.is_empty());

    // Overwrites don't change the count.
    map.set("key_0".to_string(), -1);
    assert_eq!(map.size(), 50);

    map.delete(&"key_0".to_string());
    assert_eq!(map.size(), 49);
}

#[test]
fn test_snapshot_iteration() {
    let map = new_map();
    map.set("key1".to_string(), 1);
    map.set("key2".to_string(), 2);
    map.set("key3".to_string(), 3);

    let iter = map.snapshot();
    assert_eq!(iter.len(), 3);

    let mut entries: Vec<(String, i32)> = iter.map(|e| (e.key.clone(), *e.value)).collect();
    entries.sort();
    assert_eq!(
        entries,
        vec![
            ("key1".to_string(), 1),
            ("key2".to_string(), 2),
            ("key3".to_string(), 3),
        ]
    );
}

#[test]
fn test_snapshot_is_position_stable() {
    let map = new_map();
    map.set("k".to_string(), 1);

    let mut iter = map.snapshot();
    // Mutations after the snapshot is taken are not visible to it.
    map.set("later".to_string(), 2);
    map.delete(&"k".to_string());

    let entry = iter.next().unwrap();
    assert_eq!(entry.key, "k");
    assert_eq!(*entry.value, 1);
    assert!(iter.next().is_none());
}

#[test]
fn test_zero_shard_count_uses_default() {
    let map = ShardedMap::<String, i32>::new(0, string_hasher());
    assert_eq!(map.shard_count(), DEFAULT_SHARDS);
    assert_eq!(map.stats().shard_sizes.len(), DEFAULT_SHARDS);
}

#[test]
fn test_display_hasher_for_newtype_keys() {
    #[derive(Clone, PartialEq, Eq, Hash)]
    struct EmployeeId(u32);

    impl std::fmt::Display for EmployeeId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    let map = ShardedMap::new(DEFAULT_SHARDS, display_hasher());
    map.set(EmployeeId(11110000), "Billy Bob");
    map.set(EmployeeId(22220000), "Jane Doe");
    map.set(EmployeeId(83243243), "Agent 47");

    assert_eq!(*map.get(&EmployeeId(83243243)).unwrap(), "Agent 47");
}
