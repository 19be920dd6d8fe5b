//! Generic keyed cache primitive
//!
//! Every nested guild cache (channels, emojis, members, presences, roles)
//! and the client-wide guild/user stores are instances of this container.
//! Absence is represented by the container itself; a key is never mapped
//! to a placeholder value.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// Unordered keyed cache with O(1) expected-time operations
///
/// No iteration order is guaranteed; no consumer may rely on one.
#[derive(Debug, Clone)]
pub struct EntityStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> EntityStore<K, V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Upsert a value, returning the previous value for the key if any
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Look up a value; a missing key is a `None`, never a panic
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Mutable lookup
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Return the existing value for `key` or insert one built by `default`
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(default)
    }

    /// Check whether a key is present
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Delete an entry, returning the removed value if one existed
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key/value pairs in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterate over keys
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterate over values
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Iterate over values mutably
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, K, V> {
        self.entries.values_mut()
    }

    /// Keep only the entries the predicate accepts
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain(f);
    }
}

impl<K: Eq + Hash, V> Default for EntityStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for EntityStore<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a EntityStore<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
