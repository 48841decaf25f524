use crate::areas::repository::Repository;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Record the staged entries as a new commit
    ///
    /// The commit captures the index verbatim, points at the previous HEAD
    /// as its parent and becomes the new HEAD. The index is cleared only
    /// after both the record and HEAD are on disk. Committing with nothing
    /// staged fails with [`RepositoryError::NothingToCommit`].
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let message = message.trim().to_string();
        let commit = Commit::new(
            Commit::timestamp_now(),
            message,
            index.entries().to_vec(),
            parent,
        );

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        // the staged set now lives in the commit record
        index.clear();
        index.write_updates()?;

        write!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
