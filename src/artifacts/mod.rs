//! Data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `core`: Shared utilities (typed errors, pager wrapper)
//! - `diff`: Line diffing and commit diff reconstruction
//! - `index`: Staging index data structures
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit) and hashing

pub mod core;
pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
