//! Shelf command implementations
//!
//! This module contains all command implementations, organized into two
//! categories:
//!
//! - `plumbing`: Low-level commands for direct object manipulation (hash-object, cat-file)
//! - `porcelain`: User-facing commands for version control workflows (init, add, commit, log, show)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
