//! The storage contract consumed by query execution layers.
//!
//! A query executor depends on this trait, never on the index's internal
//! node or arena representation. The contract is deliberately small: point
//! lookup, upsert, deletion, and four ordered range scans, all total over
//! well-formed keys - a missing key is a normal outcome, not an error.

use crate::index::btree::{BTree, Entry};

/// The boundary contract of the storage engine.
///
/// All scans return entries in ascending key order and never mutate the
/// store. `limit` follows one convention everywhere: `None` is unbounded,
/// `Some(0)` yields nothing, `Some(n)` truncates to at most `n` results.
pub trait Storage<K, V> {
    /// Look up `key`, returning its entry when present.
    fn get(&self, key: &K) -> Option<&Entry<K, V>>;

    /// Insert `key` → `value`, overwriting the value if the key exists.
    fn insert(&mut self, key: K, value: V);

    /// Remove `key`; `true` when an entry was removed.
    fn remove(&mut self, key: &K) -> bool;

    /// All entries, ascending.
    fn get_all(&self, limit: Option<usize>) -> Vec<&Entry<K, V>>;

    /// Entries with keys strictly above `key`, ascending.
    fn get_above(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>>;

    /// Entries with keys strictly below `key`, ascending.
    fn get_below(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>>;

    /// Entries with `low <= key <= high`, ascending.
    fn get_between(&self, low: &K, high: &K, limit: Option<usize>) -> Vec<&Entry<K, V>>;
}

impl<K: Ord, V> Storage<K, V> for BTree<K, V> {
    fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        BTree::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTree::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> bool {
        BTree::remove(self, key)
    }

    fn get_all(&self, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        BTree::get_all(self, limit)
    }

    fn get_above(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        BTree::get_above(self, key, limit)
    }

    fn get_below(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        BTree::get_below(self, key, limit)
    }

    fn get_between(&self, low: &K, high: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        BTree::get_between(self, low, high, limit)
    }
}
