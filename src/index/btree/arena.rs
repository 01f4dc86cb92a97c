//! Node arena - slot storage for every node in one tree.
//!
//! All nodes live in a `Vec` of slots indexed by [`NodeId`], so parent and
//! child links are plain indices instead of owning pointers. Slots vacated
//! by merges go on a free list and are handed out again by later splits
//! (LIFO, the most recently freed slot is the most cache-warm).

use crate::common::NodeId;
use crate::index::btree::node::Node;

/// Owns every node of a tree.
///
/// The arena is append-only except for the free list: a [`NodeId`] handed
/// out stays valid until the node is freed, and freeing is only ever done
/// by merge and root-collapse bookkeeping inside the tree.
#[derive(Debug)]
pub(crate) struct NodeArena<K, V> {
    /// Node slots; `None` marks a slot awaiting reuse.
    slots: Vec<Option<Node<K, V>>>,

    /// Stack of vacated slot ids (LIFO).
    free: Vec<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a node, reusing a vacated slot when one exists.
    pub fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none(), "free list holds a live slot");
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Remove a node from the arena, returning it by value.
    ///
    /// # Panics
    /// Panics if the slot is already vacant; that is a double free and
    /// means the structural bookkeeping is corrupted.
    pub fn free(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.0].take().expect("double free of node slot");
        self.free.push(id);
        node
    }

    /// Borrow the node in `id`'s slot.
    ///
    /// # Panics
    /// Panics if the slot is vacant. Every id reachable through the tree's
    /// links must refer to a live slot.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.0].as_ref().expect("vacant node slot")
    }

    /// Mutably borrow the node in `id`'s slot.
    ///
    /// # Panics
    /// Panics if the slot is vacant.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.0].as_mut().expect("vacant node slot")
    }

    /// Number of live nodes.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> Node<i64, ()> {
        Node::leaf(None)
    }

    #[test]
    fn test_alloc_assigns_sequential_slots() {
        let mut arena: NodeArena<i64, ()> = NodeArena::new();
        assert_eq!(arena.alloc(leaf()), NodeId::new(0));
        assert_eq!(arena.alloc(leaf()), NodeId::new(1));
        assert_eq!(arena.live_count(), 2);
    }

    #[test]
    fn test_free_slot_is_reused() {
        let mut arena: NodeArena<i64, ()> = NodeArena::new();
        let a = arena.alloc(leaf());
        let b = arena.alloc(leaf());

        arena.free(a);
        assert_eq!(arena.live_count(), 1);

        // The vacated slot comes back before the arena grows.
        assert_eq!(arena.alloc(leaf()), a);
        assert_eq!(arena.live_count(), 2);

        arena.free(b);
        arena.free(a);
        assert_eq!(arena.live_count(), 0);
    }

    #[test]
    fn test_free_returns_the_node() {
        let mut arena: NodeArena<i64, ()> = NodeArena::new();
        let mut node = leaf();
        node.entries.push(crate::index::btree::Entry::new(7, ()));
        let id = arena.alloc(node);

        let node = arena.free(id);
        assert_eq!(node.entries.len(), 1);
        assert_eq!(node.entries[0].key, 7);
    }

    #[test]
    #[should_panic(expected = "double free of node slot")]
    fn test_double_free_panics() {
        let mut arena: NodeArena<i64, ()> = NodeArena::new();
        let id = arena.alloc(leaf());
        arena.free(id);
        arena.free(id);
    }

    #[test]
    #[should_panic(expected = "vacant node slot")]
    fn test_access_after_free_panics() {
        let mut arena: NodeArena<i64, ()> = NodeArena::new();
        let id = arena.alloc(leaf());
        arena.free(id);
        arena.node(id);
    }
}
