//! HEAD reference
//!
//! The repository keeps exactly one reference: `HEAD`, a text file holding
//! the object ID of the latest commit. There are no branches and no symbolic
//! indirection, so reading the chain tip is reading this one file.
//!
//! ## File States
//!
//! - Missing or empty file: no commit has been made yet
//! - 40 hex characters: the current chain tip
//!
//! Anything else is malformed and reported as an error rather than treated
//! as "no commits".

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

/// HEAD reference manager
///
/// Handles reading and advancing the chain tip with file locking, so two
/// committing processes serialize on the HEAD file itself.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.shelf`)
    path: Box<Path>,
}

impl Refs {
    /// Read the commit ID that HEAD points to
    ///
    /// # Returns
    ///
    /// Some(ObjectId) once a commit exists, None while the repository has no
    /// commits (missing or empty HEAD file)
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path).with_context(|| {
            format!("failed to read HEAD file at {:?}", head_path)
        })?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Point HEAD at a new chain tip
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the HEAD file during the write.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), oid.as_ref().to_string())
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        // open the ref file as WRONLY and CREAT to write the oid to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.clone())
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }
}
