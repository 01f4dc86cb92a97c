//! Entry - a key/value record stored in the tree.

/// An ordered key paired with an opaque value.
///
/// Keys are unique within the whole tree; inserting an existing key
/// overwrites the value in place (upsert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The ordering key.
    pub key: K,
    /// The stored value. The tree never inspects it.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
