//! B-tree index implementation.
//!
//! An ordered, in-memory key-value container: a classic B-tree whose
//! branching factor (the *order*) is fixed at construction. Point lookups,
//! upserts, and deletions descend from the root in
//! `O(order · log_order(size))`; the four range scans run in
//! `O(limit + log_order(size))`.
//!
//! # Invariants
//! Between public operations the tree always satisfies:
//! 1. All leaves sit at the same depth (perfect balance).
//! 2. Every non-root node holds between `ceil(order/2) - 1` and
//!    `order - 1` entries.
//! 3. An internal node with `k` entries has exactly `k + 1` children, with
//!    strict key ordering across the separator boundaries.
//! 4. `size` equals the number of entries reachable from the root.
//! 5. The tree is empty (no root) exactly when no entries remain.
//!
//! [`BTree::check_invariants`] audits all five; the test suites call it
//! after every mutation.
//!
//! # Module layout
//! - this file - the facade: construction, lookup, accessors
//! - `insert` - upsert and overflow splitting
//! - `remove` - deletion, sibling borrowing, merging, root collapse
//! - `scan` - bounded in-order range scans
//! - `verify` - the invariant audit and structural diagnostics

mod arena;
mod entry;
mod insert;
mod node;
mod remove;
mod scan;
mod verify;

pub use entry::Entry;

use crate::common::config::{DEFAULT_ORDER, MIN_ORDER};
use crate::common::{Error, NodeId, Result};

use arena::NodeArena;

/// An order-parameterized B-tree mapping totally ordered keys to opaque
/// values.
///
/// # Usage
/// ```
/// use arbordb::BTree;
///
/// let mut tree = BTree::with_order(4).unwrap();
/// for key in 0..100 {
///     tree.insert(key, key * 10);
/// }
///
/// assert_eq!(tree.len(), 100);
/// assert_eq!(tree.get(&42).map(|e| e.value), Some(420));
///
/// let window = tree.get_between(&20, &50, None);
/// assert_eq!(window.len(), 31);
/// ```
///
/// # Thread Safety
/// None by design: the engine is single-threaded and synchronous. Callers
/// sharing a tree across threads must serialize access externally.
#[derive(Debug)]
pub struct BTree<K, V> {
    /// Slot storage owning every node.
    arena: NodeArena<K, V>,

    /// The root node, or `None` while the tree is empty.
    root: Option<NodeId>,

    /// Number of entries stored in the tree.
    size: usize,

    /// Maximum number of children per node (immutable after construction).
    order: usize,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree with [`DEFAULT_ORDER`].
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            size: 0,
            order: DEFAULT_ORDER,
        }
    }

    /// Create an empty tree with the given order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrder`] when `order` is below [`MIN_ORDER`].
    pub fn with_order(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder(order));
        }

        Ok(Self {
            arena: NodeArena::new(),
            root: None,
            size: 0,
            order,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of entries stored in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The branching bound fixed at construction.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    // ========================================================================
    // Occupancy bounds
    // ========================================================================

    /// Maximum entries any node may hold: `order - 1`.
    #[inline]
    pub(crate) fn max_entries(&self) -> usize {
        self.order - 1
    }

    /// Minimum entries a non-root node must hold: `ceil(order/2) - 1`.
    #[inline]
    pub(crate) fn min_entries(&self) -> usize {
        self.order.div_ceil(2) - 1
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Look up `key`, returning its entry when present.
    ///
    /// Never mutates the tree; an absent key is a normal `None`, not an
    /// error.
    pub fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        let mut current = self.root?;

        loop {
            let node = self.arena.node(current);
            let (index, found) = node.search(key);

            if found {
                return Some(&node.entries[index]);
            }
            if node.is_leaf() {
                return None;
            }

            current = node.children[index];
        }
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
