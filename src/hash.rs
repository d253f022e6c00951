use std::fmt::Display;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::Arc;

/// A caller-supplied pure routing function mapping a key to a 32-bit hash.
///
/// The hash decides which shard owns the key, so it must be deterministic:
/// the same key must produce the same hash for the lifetime of the map.
/// Stateful or randomized functions will break shard routing.
pub type KeyHashFn<K> = Arc<dyn Fn(&K) -> u32 + Send + Sync>;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Hash a byte slice with the 32-bit FNV function used by [`string_hasher`].
pub fn fnv32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= u32::from(byte);
    }
    hash
}

/// The default hasher for string keys: 32-bit FNV over the key's bytes.
pub fn string_hasher() -> KeyHashFn<String> {
    Arc::new(|key: &String| fnv32(key.as_bytes()))
}

/// A hasher for any key with a string rendering: the key is formatted with
/// its `Display` impl and the rendering is FNV-hashed.
///
/// Convenient for newtype IDs and other keys without a natural byte
/// representation. The rendering must itself be deterministic.
pub fn display_hasher<K: Display>() -> KeyHashFn<K> {
    Arc::new(|key: &K| fnv32(key.to_string().as_bytes()))
}

/// A hasher for any `Hash` key, built on ahash with fixed seeds.
///
/// Fixed seeds keep routing identical across map instances, so two maps
/// constructed with the same shard count agree on every key's shard.
pub fn auto_hasher<K: Hash>() -> KeyHashFn<K> {
    let state = ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    );
    Arc::new(move |key: &K| {
        let mut hasher = state.build_hasher();
        key.hash(&mut hasher);
        hasher.finish() as u32
    })
}
