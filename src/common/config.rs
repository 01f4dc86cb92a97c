//! Configuration constants for ArborDB.

/// Smallest supported B-tree order.
///
/// The order is the maximum number of children an internal node may have.
/// Below 3 the structure degenerates: a node could never hold an entry and
/// two separated children at the same time, so no valid split exists.
pub const MIN_ORDER: usize = 3;

/// Order used by [`BTree::new`](crate::BTree::new).
///
/// A 2-3 tree, the smallest valid configuration. Deliberately tiny so the
/// default exercises every structural path (split, borrow, merge) after a
/// handful of operations; latency-sensitive callers should pick a wider
/// order through [`BTree::with_order`](crate::BTree::with_order).
pub const DEFAULT_ORDER: usize = 3;
