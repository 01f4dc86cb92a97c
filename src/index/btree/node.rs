//! Node - one multi-way tree node held in the arena.

use crate::common::NodeId;
use crate::index::btree::Entry;

/// A single B-tree node.
///
/// Holds an ordered run of entries and, if internal, one more child link
/// than it has entries: child `i` roots the subtree of keys strictly
/// between entry `i - 1` and entry `i` (with ±∞ sentinels at the ends).
///
/// Children and the parent back-reference are [`NodeId`]s into the arena;
/// the node owns neither, so the ownership graph stays acyclic no matter
/// how splits and merges rewire the links.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    /// Entries sorted ascending and unique by key.
    pub entries: Vec<Entry<K, V>>,

    /// Child links; empty exactly when this node is a leaf.
    pub children: Vec<NodeId>,

    /// Back-reference used for bottom-up rebalancing. `None` for the root.
    pub parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Create an empty leaf.
    pub fn leaf(parent: Option<NodeId>) -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    /// A node with no children is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Binary search this node's entries for `key`.
    ///
    /// Returns `(index, true)` when the key is present. On a miss, returns
    /// `(index, false)` where `index` is both the insertion position among
    /// the entries and the child slot whose subtree must hold the key if
    /// this node is internal.
    pub fn search(&self, key: &K) -> (usize, bool) {
        match self.entries.binary_search_by(|e| e.key.cmp(key)) {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }
}
