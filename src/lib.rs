//! ArborDB - the in-memory storage engine of an embeddable relational database.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           ArborDB                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Query Layer (external collaborators)              │   │
//! │  │         SQL Scanner → Parser → Executor                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Storage Contract (storage/)                     │   │
//! │  │   get / insert / remove / get_all / get_above /          │   │
//! │  │   get_below / get_between                                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  BTree: search + split + rebalance + scans      │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        Node arena + Entry records + NodeId links         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config, node identifiers)
//! - [`index`] - The order-parameterized B-tree
//! - [`storage`] - The boundary contract consumed by query executors
//!
//! # Quick Start
//! ```
//! use arbordb::BTree;
//!
//! let mut tree: BTree<i64, &str> = BTree::new();
//! tree.insert(42, "answer");
//!
//! assert_eq!(tree.get(&42).map(|e| e.value), Some("answer"));
//! assert!(tree.remove(&42));
//! assert!(tree.is_empty());
//! ```
//!
//! # Scope
//! The engine is a single-threaded, in-memory data structure. Durability,
//! transactions, and concurrency control belong to layers above it; callers
//! that share a tree across threads must serialize access externally.

pub mod common;
pub mod index;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, Result};

pub use index::btree::{BTree, Entry};
pub use storage::Storage;
