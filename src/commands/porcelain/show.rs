use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::{ChangeKind, CommitDiff, FileChange};
use crate::artifacts::diff::line_diff::{Span, SpanKind};
use crate::artifacts::diff::myers::MyersDiff;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print what a commit changed, file by file
    ///
    /// Accepts a full object ID or a unique prefix. Every file recorded in
    /// the commit is printed with its content; files the parent commit also
    /// recorded additionally get a line diff, the rest are annotated as new
    /// or as part of the first commit.
    pub fn show(&self, revision: &str) -> anyhow::Result<()> {
        let commit_oid = self.database().resolve_prefix(revision)?;
        let commit = self.database().load_commit(&commit_oid)?;

        let changes = CommitDiff::new(self.database(), MyersDiff).compare(&commit)?;

        writeln!(self.writer(), "Changes in the commit :\n")?;
        for change in &changes {
            self.print_file_change(change)?;
        }

        Ok(())
    }

    fn print_file_change(&self, change: &FileChange) -> anyhow::Result<()> {
        writeln!(self.writer(), "File : {}", change.path().display())?;
        writeln!(self.writer(), "{}", change.after_content())?;

        match change.kind() {
            ChangeKind::Diffed => {
                writeln!(self.writer(), "Diff :")?;
                for span in change.spans().unwrap_or_default() {
                    self.print_span(span)?;
                }
                writeln!(self.writer())?;
            }
            ChangeKind::New => {
                writeln!(self.writer(), "New file in this commit")?;
            }
            ChangeKind::FirstCommit => {
                writeln!(self.writer(), "First Commit")?;
            }
        }

        Ok(())
    }

    fn print_span(&self, span: &Span) -> anyhow::Result<()> {
        match span.kind() {
            SpanKind::Added => {
                write!(self.writer(), "{}", format!("++{}", span.text()).green())?;
            }
            SpanKind::Removed => {
                write!(self.writer(), "{}", format!("--{}", span.text()).red())?;
            }
            SpanKind::Unchanged => {
                write!(self.writer(), "{}", span.text().bright_black())?;
            }
        }

        Ok(())
    }
}
