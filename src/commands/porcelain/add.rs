use crate::areas::repository::Repository;
use crate::artifacts::index::staged_entry::StagedEntry;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Stage files for the next commit
    ///
    /// Directories are expanded to the files below them. Each staged file is
    /// stored as a blob immediately and appended to the index, so staging
    /// the same path again records a second entry rather than replacing the
    /// first. Paths that match nothing are reported and skipped without
    /// failing the rest of the invocation.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        for raw_path in paths {
            // Expand the provided path if it's a directory
            let expanded = match self.workspace().list_files(Some(PathBuf::from(raw_path))) {
                Ok(expanded) => expanded,
                Err(_) => {
                    writeln!(
                        self.writer(),
                        "pathspec '{raw_path}' did not match any files"
                    )?;
                    continue;
                }
            };

            for path in expanded {
                let blob = self.workspace().parse_blob(&path)?;
                let blob_id = self.database().store(&blob)?;

                index.stage(StagedEntry::new(path, blob_id));
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
