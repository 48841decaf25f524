//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Content-addressable object store for blobs and commits
//! - `index`: Staging area queueing files for the next commit
//! - `refs`: HEAD reference management
//! - `repository`: High-level repository state and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
