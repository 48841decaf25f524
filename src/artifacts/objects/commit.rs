//! Commit object
//!
//! Commits snapshot whatever was staged at commit time. They contain:
//! - A creation timestamp
//! - The commit message
//! - The staged entries (paths and blob IDs), copied from the index
//! - The parent commit ID (absent for the first commit)
//!
//! ## Format
//!
//! On disk, a commit is its JSON record with fields in declaration order:
//!
//! ```json
//! {"timestamp":"2024-01-01T00:00:00+00:00","message":"...","files":[...],"parent":null}
//! ```
//!
//! The record is hashed and stored exactly like a blob, so commits and blobs
//! share one address space in the object store. Field order is fixed, which
//! makes the serialization deterministic: the same fields always produce the
//! same object ID.

use crate::artifacts::index::staged_entry::StagedEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Environment override for the commit timestamp
///
/// Accepts RFC 3339, RFC 2822 or `%Y-%m-%d %H:%M:%S %z`. With the timestamp
/// pinned, commit IDs become reproducible, which the integration tests rely
/// on.
pub const COMMIT_DATE_ENV: &str = "SHELF_COMMIT_DATE";

/// Commit object
///
/// A snapshot of the staged entries with metadata, linked to its parent to
/// form the commit chain. Two commits with identical fields are the same
/// object; any difference in timestamp, message, files or parent yields a
/// different ID.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Creation time with fixed offset, RFC 3339 in the record
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Commit message
    message: String,
    /// Staged entries captured from the index, in staging order
    files: Vec<StagedEntry>,
    /// Parent commit ID (None for the first commit)
    parent: Option<ObjectId>,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Creation time (see [`Commit::timestamp_now`])
    /// * `message` - Commit message
    /// * `files` - Staged entries, taken verbatim from the index
    /// * `parent` - Parent commit ID (None for the first commit)
    pub fn new(
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        message: String,
        files: Vec<StagedEntry>,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            timestamp,
            message,
            files,
            parent,
        }
    }

    /// Resolve the timestamp for a commit being created now
    ///
    /// Reads the current local time, unless `SHELF_COMMIT_DATE` is set to a
    /// parseable date, in which case that date wins.
    pub fn timestamp_now() -> chrono::DateTime<chrono::FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                chrono::DateTime::parse_from_rfc3339(&date_str)
                    .or_else(|_| chrono::DateTime::parse_from_rfc2822(&date_str))
                    .or_else(|_| {
                        chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z")
                    })
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the staged entries recorded in this commit, in staging order
    pub fn files(&self) -> &[StagedEntry] {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let record = serde_json::to_vec(self).context("Unable to encode commit record")?;
        Ok(Bytes::from(record))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Unable to decode commit record")
    }
}

impl Object for Commit {}

#[cfg(test)]
mod tests {
    use crate::artifacts::index::staged_entry::StagedEntry;
    use crate::artifacts::objects::commit::Commit;
    use crate::artifacts::objects::object::{Object, Packable, Unpackable};
    use crate::artifacts::objects::object_id::ObjectId;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn sample_commit(parent: Option<ObjectId>) -> Commit {
        let timestamp = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00")
            .expect("valid timestamp");
        let oid = ObjectId::try_parse("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d".to_string())
            .expect("valid oid");

        Commit::new(
            timestamp,
            "first commit".to_string(),
            vec![StagedEntry::new(PathBuf::from("hello.txt"), oid)],
            parent,
        )
    }

    #[test]
    fn test_identical_fields_produce_the_same_object_id() {
        let left = sample_commit(None);
        let right = sample_commit(None);

        assert_eq!(
            left.object_id().expect("left oid"),
            right.object_id().expect("right oid")
        );
    }

    #[test]
    fn test_parent_changes_the_object_id() {
        let root = sample_commit(None);
        let parent_oid = root.object_id().expect("root oid");
        let child = sample_commit(Some(parent_oid));

        assert_ne!(
            root.object_id().expect("root oid"),
            child.object_id().expect("child oid")
        );
    }

    #[test]
    fn test_record_round_trips_byte_for_byte() {
        let commit = sample_commit(None);
        let encoded = commit.serialize().expect("commit serializes");

        let decoded = Commit::deserialize(Cursor::new(encoded.clone())).expect("commit decodes");
        let re_encoded = decoded.serialize().expect("decoded commit serializes");

        assert_eq!(encoded, re_encoded);
        assert_eq!(commit, decoded);
    }

    #[test]
    fn test_first_commit_records_a_null_parent() {
        let commit = sample_commit(None);
        let record = String::from_utf8(commit.serialize().expect("commit serializes").to_vec())
            .expect("record is utf-8");

        assert!(record.ends_with("\"parent\":null}"));
        assert!(record.starts_with("{\"timestamp\":"));
    }

    #[test]
    fn test_short_message_takes_the_first_line() {
        let timestamp = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00")
            .expect("valid timestamp");
        let commit = Commit::new(
            timestamp,
            "summary line\n\nlonger body".to_string(),
            vec![],
            None,
        );

        assert_eq!(commit.short_message(), "summary line");
    }
}
