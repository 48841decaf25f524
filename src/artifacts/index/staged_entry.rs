//! Staging index entry
//!
//! Each entry pairs a workspace path with the object ID of the blob that was
//! stored when the path was staged. Entries carry no stat metadata: the blob
//! is written at staging time, so the entry is a pure (path, oid) record.
//!
//! The index keeps entries in staging order and never deduplicates, so the
//! same path can appear more than once between commits.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single staged file, as recorded in the index and in commit records
///
/// Serializes as `{"path": "...", "oid": "..."}`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, new)]
pub struct StagedEntry {
    /// File path relative to the repository root
    path: PathBuf,
    /// SHA-1 hash of the staged content
    oid: ObjectId,
}

impl StagedEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }
}
