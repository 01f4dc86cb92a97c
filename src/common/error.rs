//! Error types for ArborDB.

use thiserror::Error;

use crate::common::config::MIN_ORDER;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ArborDB.
///
/// Point operations and range scans are total: a missing key is a normal
/// boolean/`Option` outcome, never an error. What remains is fallible
/// construction plus the invariant audit of
/// [`BTree::check_invariants`](crate::BTree::check_invariants), whose
/// variants describe the first structural violation found. Any of those
/// surfacing outside a test for deliberately corrupted state indicates a
/// bug in the split/merge bookkeeping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested B-tree order is below [`MIN_ORDER`].
    #[error("b-tree order must be at least {MIN_ORDER}, got {0}")]
    InvalidOrder(usize),

    /// The recorded entry count disagrees with the entries reachable
    /// from the root.
    #[error("recorded size {recorded} does not match {actual} reachable entries")]
    SizeMismatch { recorded: usize, actual: usize },

    /// Two leaves sit at different depths, so the tree is no longer
    /// perfectly balanced.
    #[error("leaf found at depth {found}, expected uniform leaf depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    /// A node holds more entries than the order allows.
    #[error("node holds {len} entries, above the maximum of {max}")]
    NodeOverflow { len: usize, max: usize },

    /// A node holds fewer entries than its minimum occupancy.
    #[error("node holds {len} entries, below the minimum of {min}")]
    NodeUnderflow { len: usize, min: usize },

    /// An internal node's child count is not one more than its entry count.
    #[error("internal node holds {entries} entries but {children} children")]
    ChildCountMismatch { entries: usize, children: usize },

    /// Keys within a node are not strictly ascending, or a subtree holds a
    /// key outside the separator bounds imposed by its ancestors.
    #[error("entry keys are out of order or escape their separator bounds")]
    KeyOrderViolation,

    /// A child's parent back-reference does not point at the node that
    /// owns it.
    #[error("child node does not link back to its owning parent")]
    StaleParentLink,
}
