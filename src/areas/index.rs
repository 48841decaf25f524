//! Staging index (staging area)
//!
//! The index queues the files that will make up the next commit. Every
//! `add` appends one entry per staged file; `commit` copies the whole list
//! into the commit record and clears it.
//!
//! ## Index File Format
//!
//! The index file is a JSON array of staged entries, `[]` when nothing is
//! staged:
//!
//! ```json
//! [{"path":"a.txt","oid":"..."},{"path":"b.txt","oid":"..."}]
//! ```
//!
//! Entries keep their staging order and are never deduplicated: staging the
//! same path twice before a commit records two entries, and both end up in
//! the commit record.

use crate::artifacts::index::staged_entry::StagedEntry;
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Staging index
///
/// In-memory copy of the index file. The lifecycle is always
/// rehydrate → mutate → write_updates, so concurrent commands exchange
/// state through the locked file rather than through shared memory.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.shelf/index`)
    path: Box<Path>,
    /// Staged entries in staging order, duplicates allowed
    entries: Vec<StagedEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (typically `.shelf/index`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop the in-memory state
    fn reset(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// Replaces the in-memory entries with the decoded content of the index
    /// file. A missing file is recreated holding the empty array; an empty
    /// file counts as an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path().exists() {
            self.reset();
            // seed the index file with its canonical empty form
            std::fs::write(self.path(), b"[]").context(format!(
                "Unable to create index file {}",
                self.path().display()
            ))?;
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        self.reset();

        // if the index file is empty, return early
        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut raw = String::new();
        lock.deref_mut().read_to_string(&mut raw)?;

        self.entries = serde_json::from_str(&raw).context(format!(
            "Unable to decode index file {}",
            self.path().display()
        ))?;

        Ok(())
    }

    /// Append an entry to the staged list
    ///
    /// Staging never replaces earlier entries: re-staging a path appends a
    /// new entry after the existing one.
    pub fn stage(&mut self, entry: StagedEntry) {
        self.entries.push(entry);
        self.changed = true;
    }

    /// Empty the staged list
    ///
    /// Called by commit after the entries have been copied into the commit
    /// record.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Staged entries in staging order
    pub fn entries(&self) -> &[StagedEntry] {
        &self.entries
    }

    /// Persist the in-memory entries back to the index file
    ///
    /// Writing is skipped when nothing changed since the last rehydrate.
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let payload = serde_json::to_vec(&self.entries).context(format!(
            "Unable to encode index file {}",
            self.path().display()
        ))?;
        lock.deref_mut().write_all(&payload)?;

        self.changed = false;

        Ok(())
    }
}
