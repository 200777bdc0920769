use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub use rustc_hash::{FxHashMap, FxHashSet};


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is preserved, which is what gives nodes their first-seen index
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Ordered set variant of FxIndexMap
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
