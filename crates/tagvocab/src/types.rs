//! # Common Types

/// A vocabulary unit: a character, word form, tag, or relation label.
pub type Unit = compact_str::CompactString;

/// A unit frequency count.
pub type Count = usize;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VocabHashMap<K, V> {
            VocabHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type VocabHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VocabHashMap<K, V> {
            VocabHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type VocabHashSet<V> = std::collections::HashSet<V>;

    } else {
        compile_error!("tagvocab requires the \"std\" feature");
    }
}
