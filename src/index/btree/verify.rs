//! Invariant audit and structural diagnostics.
//!
//! Corruption of the tree (a split or merge that miscounts children, loses
//! an entry, or leaves a stale parent link) is a programming error, not a
//! runtime condition: public operations never report it. Instead,
//! [`BTree::check_invariants`] walks the whole structure and returns the
//! first violation as a typed [`Error`], and the test suites run it after
//! every mutation.

use crate::common::{Error, NodeId, Result};
use crate::index::btree::BTree;

impl<K, V> BTree<K, V> {
    /// Number of levels from root to leaf; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;

        while let Some(id) = current {
            height += 1;
            current = self.arena.node(id).children.first().copied();
        }
        height
    }

    /// Number of live nodes in the arena.
    ///
    /// Merges and root collapses free their absorbed nodes, so this tracks
    /// the actual tree shape rather than historical allocation.
    pub fn node_count(&self) -> usize {
        self.arena.live_count()
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Audit all five structural invariants.
    ///
    /// Checks, in one walk from the root:
    /// - every leaf sits at the same depth;
    /// - every node respects the occupancy bounds for its role (the root
    ///   must hold at least one entry while it exists, everything else at
    ///   least `ceil(order/2) - 1`, nobody more than `order - 1`);
    /// - internal nodes have exactly one more child than entries, children
    ///   link back to their parent, and every key falls strictly inside
    ///   the separator bounds inherited from above;
    /// - the recorded size matches the number of reachable entries.
    ///
    /// # Errors
    /// Returns the first violation found; see [`Error`] for the taxonomy.
    pub fn check_invariants(&self) -> Result<()> {
        let Some(root) = self.root else {
            // Invariant 5: no root means no entries.
            return if self.size == 0 {
                Ok(())
            } else {
                Err(Error::SizeMismatch {
                    recorded: self.size,
                    actual: 0,
                })
            };
        };

        let mut walk = Walk {
            tree: self,
            leaf_depth: None,
            reachable: 0,
        };
        walk.check_node(root, None, None, None, 0)?;

        if walk.reachable != self.size {
            return Err(Error::SizeMismatch {
                recorded: self.size,
                actual: walk.reachable,
            });
        }
        Ok(())
    }
}

/// State threaded through one audit walk.
struct Walk<'t, K, V> {
    tree: &'t BTree<K, V>,
    /// Depth of the first leaf encountered; all others must match.
    leaf_depth: Option<usize>,
    /// Entries counted so far.
    reachable: usize,
}

impl<K: Ord, V> Walk<'_, K, V> {
    fn check_node(
        &mut self,
        id: NodeId,
        parent: Option<NodeId>,
        low: Option<&K>,
        high: Option<&K>,
        depth: usize,
    ) -> Result<()> {
        let node = self.tree.arena.node(id);

        if node.parent != parent {
            return Err(Error::StaleParentLink);
        }

        let len = node.entries.len();
        let max = self.tree.max_entries();
        // A present root holds at least one entry: an emptied root is
        // replaced by its lone child or dropped, never kept.
        let min = if parent.is_none() {
            1
        } else {
            self.tree.min_entries()
        };
        if len > max {
            return Err(Error::NodeOverflow { len, max });
        }
        if len < min {
            return Err(Error::NodeUnderflow { len, min });
        }

        for (index, entry) in node.entries.iter().enumerate() {
            let ordered_within = index == 0 || node.entries[index - 1].key < entry.key;
            let above_low = low.is_none_or(|lo| *lo < entry.key);
            let below_high = high.is_none_or(|hi| entry.key < *hi);
            if !(ordered_within && above_low && below_high) {
                return Err(Error::KeyOrderViolation);
            }
        }
        self.reachable += len;

        if node.is_leaf() {
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected != depth => {
                    Err(Error::UnevenLeafDepth {
                        expected,
                        found: depth,
                    })
                }
                Some(_) => Ok(()),
            };
        }

        if node.children.len() != len + 1 {
            return Err(Error::ChildCountMismatch {
                entries: len,
                children: node.children.len(),
            });
        }

        for (index, &child) in node.children.iter().enumerate() {
            // Child `i` is bounded by entries `i - 1` and `i`, with the
            // walk's own bounds at the outer edges.
            let child_low = if index == 0 {
                low
            } else {
                Some(&node.entries[index - 1].key)
            };
            let child_high = if index == len {
                high
            } else {
                Some(&node.entries[index].key)
            };
            self.check_node(child, Some(id), child_low, child_high, depth + 1)?;
        }
        Ok(())
    }
}
