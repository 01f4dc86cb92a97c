//! Common types and utilities shared across ArborDB.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The arena node identifier

pub mod config;
pub mod error;
mod node_id;

pub use error::{Error, Result};

pub(crate) use node_id::NodeId;
