//! Typed repository errors
//!
//! Failure modes that callers are expected to react to get a variant here,
//! so they stay matchable after travelling through `anyhow` layers via
//! `downcast_ref`. Everything else (I/O, encoding) is reported as a plain
//! `anyhow` error with context.

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Errors with meaning beyond their message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The object store has no file for this ID
    #[error("object {oid} not found")]
    ObjectNotFound { oid: ObjectId },

    /// A commit names a parent that cannot be loaded, so the walk cannot
    /// continue past it
    #[error("corrupt history: parent commit {oid} cannot be loaded")]
    CorruptHistory { oid: ObjectId },

    /// Committing with an empty staging index
    #[error("nothing to commit (staging index is empty)")]
    NothingToCommit,

    /// Initializing a directory that already hosts a repository
    #[error("repository is already initialized")]
    AlreadyInitialized,
}
