//! Deletion and bottom-up rebalancing.
//!
//! Every deletion reduces to removing an entry from a leaf: a key found in
//! an internal node is first replaced by its in-order predecessor (the
//! maximum of the left child's subtree), which moves the structural hole
//! down to the predecessor's leaf. The leaf may then underflow, and the
//! repair walks upward through parent links:
//!
//! 1. stop at the root, or when the node still meets minimum occupancy;
//! 2. otherwise borrow through the parent from the left sibling, then the
//!    right, whichever has an entry to spare;
//! 3. otherwise merge with a sibling, pulling the separator down - which
//!    shrinks the parent and may push the underflow one level up.
//!
//! A root drained to zero entries collapses: its lone child becomes the new
//! root (the tree shrinks a level), or, with no children left, the tree
//! becomes empty.

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::BTree;

impl<K: Ord, V> BTree<K, V> {
    /// Remove `key` from the tree.
    ///
    /// Returns `true` when an entry was removed; `false` leaves the tree
    /// untouched.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(root) = self.root else {
            return false;
        };

        // Locate the node holding the key.
        let mut current = root;
        let (holder, index) = loop {
            let node = self.arena.node(current);
            let (index, found) = node.search(key);

            if found {
                break (current, index);
            }
            if node.is_leaf() {
                return false;
            }

            current = node.children[index];
        };

        let start = if self.arena.node(holder).is_leaf() {
            self.arena.node_mut(holder).entries.remove(index);
            holder
        } else {
            // Internal hit: swap in the in-order predecessor, the maximum
            // entry of the subtree rooted at the child left of the key.
            let mut leaf = self.arena.node(holder).children[index];
            while !self.arena.node(leaf).is_leaf() {
                leaf = *self
                    .arena
                    .node(leaf)
                    .children
                    .last()
                    .expect("internal node with no children");
            }

            let predecessor = self
                .arena
                .node_mut(leaf)
                .entries
                .pop()
                .expect("leaf on the descent path with no entries");
            self.arena.node_mut(holder).entries[index] = predecessor;
            leaf
        };

        self.size -= 1;
        self.rebalance(start);
        true
    }

    /// Restore minimum occupancy from `start` upward.
    fn rebalance(&mut self, start: NodeId) {
        let mut current = start;

        loop {
            if Some(current) == self.root {
                self.collapse_root();
                return;
            }

            let (len, parent) = {
                let node = self.arena.node(current);
                let parent = node.parent.expect("non-root node missing parent link");
                (node.entries.len(), parent)
            };
            if len >= self.min_entries() {
                return;
            }

            let child_index = self
                .arena
                .node(parent)
                .children
                .iter()
                .position(|&c| c == current)
                .expect("node not registered in its parent");

            // Borrow from the left sibling when it has an entry to spare.
            if child_index > 0 {
                let left = self.arena.node(parent).children[child_index - 1];
                if self.arena.node(left).entries.len() > self.min_entries() {
                    self.borrow_from_left(parent, child_index);
                    return;
                }
            }

            // Then the right sibling.
            if child_index + 1 < self.arena.node(parent).children.len() {
                let right = self.arena.node(parent).children[child_index + 1];
                if self.arena.node(right).entries.len() > self.min_entries() {
                    self.borrow_from_right(parent, child_index);
                    return;
                }
            }

            // Neither sibling can lend: merge with a neighbor. The merge
            // removes a separator from the parent, which may underflow in
            // turn.
            let left_slot = child_index.saturating_sub(1);
            self.merge_with_right_neighbor(parent, left_slot);
            current = parent;
        }
    }

    /// Rotate an entry in from the left sibling of `parent.children[child_index]`.
    ///
    /// The separator between the siblings drops into the underflowed node's
    /// front; the left sibling's maximum entry replaces the separator; for
    /// internal nodes the sibling's last child crosses over with it.
    fn borrow_from_left(&mut self, parent: NodeId, child_index: usize) {
        let separator_slot = child_index - 1;
        let (left, node) = {
            let p = self.arena.node(parent);
            (p.children[separator_slot], p.children[child_index])
        };

        let (lent, lent_child) = {
            let left_node = self.arena.node_mut(left);
            let entry = left_node
                .entries
                .pop()
                .expect("left sibling has no entry to lend");
            let child = left_node.children.pop();
            (entry, child)
        };

        let separator =
            std::mem::replace(&mut self.arena.node_mut(parent).entries[separator_slot], lent);

        let target = self.arena.node_mut(node);
        target.entries.insert(0, separator);
        if let Some(child) = lent_child {
            target.children.insert(0, child);
            self.arena.node_mut(child).parent = Some(node);
        }

        trace!("borrowed entry from left sibling");
    }

    /// Mirror of [`Self::borrow_from_left`] for the right sibling.
    fn borrow_from_right(&mut self, parent: NodeId, child_index: usize) {
        let separator_slot = child_index;
        let (node, right) = {
            let p = self.arena.node(parent);
            (p.children[child_index], p.children[child_index + 1])
        };

        let (lent, lent_child) = {
            let right_node = self.arena.node_mut(right);
            let entry = right_node.entries.remove(0);
            let child = if right_node.is_leaf() {
                None
            } else {
                Some(right_node.children.remove(0))
            };
            (entry, child)
        };

        let separator =
            std::mem::replace(&mut self.arena.node_mut(parent).entries[separator_slot], lent);

        let target = self.arena.node_mut(node);
        target.entries.push(separator);
        if let Some(child) = lent_child {
            target.children.push(child);
            self.arena.node_mut(child).parent = Some(node);
        }

        trace!("borrowed entry from right sibling");
    }

    /// Merge `parent.children[left_slot]` with the child to its right.
    ///
    /// The separator between the two drops down to sit between their entry
    /// runs; the right child's entries and children are absorbed into the
    /// left and its arena slot is freed. The parent loses one entry and one
    /// child.
    fn merge_with_right_neighbor(&mut self, parent: NodeId, left_slot: usize) {
        let (receiver, separator, donor_id) = {
            let parent_node = self.arena.node_mut(parent);
            let separator = parent_node.entries.remove(left_slot);
            let donor_id = parent_node.children.remove(left_slot + 1);
            (parent_node.children[left_slot], separator, donor_id)
        };

        let donor = self.arena.free(donor_id);
        let adopted = donor.children;
        {
            let receiver_node = self.arena.node_mut(receiver);
            receiver_node.entries.push(separator);
            receiver_node.entries.extend(donor.entries);
            receiver_node.children.extend(adopted.iter().copied());
        }
        for child in adopted {
            self.arena.node_mut(child).parent = Some(receiver);
        }

        trace!("merged underflowed node with sibling");
    }

    /// Replace or drop a root drained to zero entries.
    fn collapse_root(&mut self) {
        let Some(root) = self.root else {
            return;
        };

        let lone_child = {
            let node = self.arena.node(root);
            if !node.entries.is_empty() {
                return;
            }
            node.children.first().copied()
        };

        match lone_child {
            Some(child) => {
                // Merging the root's last two children left it with a
                // single child and no separator.
                self.arena.free(root);
                self.arena.node_mut(child).parent = None;
                self.root = Some(child);
                debug!("root collapsed, tree height decreased");
            }
            None => {
                self.arena.free(root);
                self.root = None;
                debug!("last entry removed, tree is empty");
            }
        }
    }
}
