//! Upsert and overflow splitting.
//!
//! Insertion always lands in a leaf (or replaces a value in place somewhere
//! on the descent path). A leaf insertion may push a node one entry past
//! its capacity; [`BTree::split`] then carves the node in two around its
//! median and promotes the median into the parent, and the overflow check
//! walks upward through parent links until every node is back within
//! bounds. When the root itself splits, a fresh root is allocated and the
//! tree grows one level.

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::{BTree, Entry};

impl<K: Ord, V> BTree<K, V> {
    /// Insert `key` → `value`, overwriting the value in place if the key
    /// already exists (upsert; size is unchanged in that case).
    pub fn insert(&mut self, key: K, value: V) {
        let Some(root) = self.root else {
            // First entry: the tree becomes a single root leaf.
            let mut leaf = Node::leaf(None);
            leaf.entries.push(Entry::new(key, value));
            self.root = Some(self.arena.alloc(leaf));
            self.size = 1;
            return;
        };

        // Descend to the leaf that must hold the key, upserting on the way
        // if the key shows up in an internal node.
        let mut current = root;
        let slot = loop {
            let node = self.arena.node(current);
            let (index, found) = node.search(&key);

            if found {
                self.arena.node_mut(current).entries[index].value = value;
                return;
            }
            if node.is_leaf() {
                break index;
            }

            current = node.children[index];
        };

        self.arena
            .node_mut(current)
            .entries
            .insert(slot, Entry::new(key, value));
        self.size += 1;

        // The leaf may now hold `order` entries; split upward until every
        // node on the path is back within capacity.
        let mut overflowed = current;
        while self.arena.node(overflowed).entries.len() > self.max_entries() {
            overflowed = self.split(overflowed);
        }
    }

    /// Split an overflowing node around its median entry.
    ///
    /// The node keeps entries `[0, mid)` (and children `[0, mid]`) and
    /// stays in its parent's child slot; a freshly allocated right sibling
    /// takes entries `(mid, end)` (and children `(mid, end]`); the median
    /// at `mid = entries.len() / 2` moves up into the parent, with the
    /// right sibling installed immediately after the node's slot. Splitting
    /// the root allocates a new root holding only the median.
    ///
    /// Returns the node that received the median, so the caller can
    /// continue the overflow check one level up.
    fn split(&mut self, node_id: NodeId) -> NodeId {
        let (median, right, parent) = {
            let node = self.arena.node_mut(node_id);
            let mid = node.entries.len() / 2;

            let right_entries = node.entries.split_off(mid + 1);
            let median = node
                .entries
                .pop()
                .expect("split on a node with no entries");
            let right_children = if node.is_leaf() {
                Vec::new()
            } else {
                node.children.split_off(mid + 1)
            };

            let right = Node {
                entries: right_entries,
                children: right_children,
                parent: node.parent,
            };
            (median, right, node.parent)
        };

        // Children handed to the right sibling need their back-references
        // rewired once the sibling has an id.
        let moved_children = right.children.clone();
        let right_id = self.arena.alloc(right);
        for child in moved_children {
            self.arena.node_mut(child).parent = Some(right_id);
        }

        match parent {
            Some(parent_id) => {
                let parent_node = self.arena.node_mut(parent_id);
                // The node's child slot is exactly the insertion index of
                // the median's key, so the median lands between the two
                // halves.
                let (index, _) = parent_node.search(&median.key);
                parent_node.entries.insert(index, median);
                parent_node.children.insert(index + 1, right_id);

                trace!(slot = index, "split node, promoted median into parent");
                parent_id
            }
            None => {
                let root = Node {
                    entries: vec![median],
                    children: vec![node_id, right_id],
                    parent: None,
                };
                let root_id = self.arena.alloc(root);
                self.arena.node_mut(node_id).parent = Some(root_id);
                self.arena.node_mut(right_id).parent = Some(root_id);
                self.root = Some(root_id);

                debug!("root split, tree height increased");
                root_id
            }
        }
    }
}
