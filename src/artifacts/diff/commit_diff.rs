//! Commit diff reconstruction
//!
//! Rebuilds what a commit changed, file by file, from stored state alone:
//! the commit record, its parent's record and the blobs both point at.
//! Nothing is read from the working tree, so `show` works the same whether
//! or not the files still exist.

use crate::areas::database::Database;
use crate::artifacts::diff::line_diff::{LineDiff, Span};
use crate::artifacts::index::staged_entry::StagedEntry;
use crate::artifacts::objects::commit::Commit;
use derive_new::new;
use std::path::{Path, PathBuf};

/// How a file's report was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The parent commit also recorded this path, so the report carries
    /// line spans against the parent's content
    Diffed,
    /// The parent commit exists but does not record this path
    New,
    /// The commit has no parent at all
    FirstCommit,
}

/// Per-file change report
///
/// One report per entry of the inspected commit, in the commit's own entry
/// order. Spans are only present for [`ChangeKind::Diffed`]; the other two
/// kinds carry the full content and a note instead of a line diff.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileChange {
    path: PathBuf,
    after_content: String,
    spans: Option<Vec<Span>>,
    kind: ChangeKind,
}

impl FileChange {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn after_content(&self) -> &str {
        &self.after_content
    }

    pub fn spans(&self) -> Option<&[Span]> {
        self.spans.as_deref()
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }
}

/// Reconstructs the changes a commit introduced over its parent
///
/// The line-diff algorithm is injected, so the reconstruction logic is
/// independent of how spans are computed.
#[derive(new)]
pub struct CommitDiff<'d, D: LineDiff> {
    database: &'d Database,
    line_diff: D,
}

impl<D: LineDiff> CommitDiff<'_, D> {
    /// Build one report per file recorded in the commit
    ///
    /// Every entry of the commit is reported, duplicates included, in entry
    /// order. Loading the parent record or any referenced blob can fail,
    /// which makes the whole reconstruction fail; a partial report is never
    /// returned.
    pub fn compare(&self, commit: &Commit) -> anyhow::Result<Vec<FileChange>> {
        let parent = commit
            .parent()
            .map(|parent_oid| self.database.load_commit(parent_oid))
            .transpose()?;

        commit
            .files()
            .iter()
            .map(|entry| self.file_change(entry, parent.as_ref()))
            .collect()
    }

    fn file_change(
        &self,
        entry: &StagedEntry,
        parent: Option<&Commit>,
    ) -> anyhow::Result<FileChange> {
        let after_content = self.database.load_blob(entry.oid())?.content().to_string();

        let Some(parent) = parent else {
            return Ok(FileChange::new(
                entry.path().to_path_buf(),
                after_content,
                None,
                ChangeKind::FirstCommit,
            ));
        };

        // when a path was staged twice in the parent, the first entry in
        // list order supplies the before content
        let before_entry = parent
            .files()
            .iter()
            .find(|parent_entry| parent_entry.path() == entry.path());

        match before_entry {
            Some(before_entry) => {
                let before_content = self.database.load_blob(before_entry.oid())?;
                let spans = self
                    .line_diff
                    .diff_lines(before_content.content(), &after_content);

                Ok(FileChange::new(
                    entry.path().to_path_buf(),
                    after_content,
                    Some(spans),
                    ChangeKind::Diffed,
                ))
            }
            None => Ok(FileChange::new(
                entry.path().to_path_buf(),
                after_content,
                None,
                ChangeKind::New,
            )),
        }
    }
}
