//! Map decomposition helpers
//!
//! These are not iterators: each call materializes a fresh `Vec`.
//! Order is whatever the map's iteration order happens to be, so the
//! outputs of `keys` and `values` are not index-aligned.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// One key/value pair taken from a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    /// Map key
    pub key: K,
    /// Value stored under `key`
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Build an entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Split into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Every key of `map`, in unspecified order.
pub fn keys<K: Clone, V, S: BuildHasher>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Every value of `map`, in unspecified order.
pub fn values<K, V: Clone, S: BuildHasher>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Every key/value pair of `map`, in unspecified order.
pub fn entries<K: Clone, V: Clone, S: BuildHasher>(map: &HashMap<K, V, S>) -> Vec<Entry<K, V>> {
    map.iter()
        .map(|(key, value)| Entry::new(key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> HashMap<&'static str, u32> {
        HashMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_empty_map() {
        let empty: HashMap<String, u8> = HashMap::new();
        assert!(keys(&empty).is_empty());
        assert!(values(&empty).is_empty());
        assert!(entries(&empty).is_empty());
    }

    #[test]
    fn test_keys_unique_and_complete() {
        let map = sample();
        let ks = keys(&map);
        assert_eq!(ks.len(), map.len());
        let unique: HashSet<_> = ks.into_iter().collect();
        assert_eq!(unique, HashSet::from(["a", "b", "c"]));
    }

    #[test]
    fn test_values_as_multiset() {
        let map = HashMap::from([(1, 'x'), (2, 'x'), (3, 'y')]);
        let mut vs = values(&map);
        vs.sort_unstable();
        assert_eq!(vs, vec!['x', 'x', 'y']);
    }

    #[test]
    fn test_entries_match_map() {
        let map = sample();
        let es = entries(&map);
        assert_eq!(es.len(), map.len());
        for entry in es {
            assert_eq!(map.get(entry.key), Some(&entry.value));
        }
    }

    #[test]
    fn test_entry_pair_conversion() {
        let entry = Entry::from(("k", 9));
        assert_eq!(entry, Entry::new("k", 9));
        assert_eq!(entry.into_pair(), ("k", 9));
    }
}
