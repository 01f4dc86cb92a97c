//! Node identifier type.

use std::fmt;

/// Identifies a node slot in the B-tree arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in a `Vec`-backed arena
/// 2. Direct indexing without casting: `slots[node_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Parent and child links are stored as `NodeId`s rather than owning
/// pointers, which keeps ownership strictly tree-shaped: the arena owns
/// every node, and a parent back-reference can never form a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
