//! Index structures.
//!
//! Currently a single ordered index: the order-parameterized [`BTree`].

pub mod btree;

pub use btree::{BTree, Entry};
