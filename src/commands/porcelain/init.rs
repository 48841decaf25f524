use crate::areas::repository::Repository;
use crate::artifacts::core::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Initialize the repository layout under `.shelf`
    ///
    /// Running init inside an existing repository reports that and leaves
    /// every file untouched; it never truncates HEAD or the index.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        match self.initialize().await {
            Ok(()) => {
                write!(
                    self.writer(),
                    "Initialized empty shelf repository in {}",
                    self.path().display()
                )?;
                Ok(())
            }
            Err(err)
                if err.downcast_ref::<RepositoryError>()
                    == Some(&RepositoryError::AlreadyInitialized) =>
            {
                write!(
                    self.writer(),
                    "Repository already initialized in {}",
                    self.path().display()
                )?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    async fn initialize(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .shelf/objects directory")?;

        // create-new semantics: an existing HEAD means an existing
        // repository, and a lost race reports the same way
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.refs().head_path())
        {
            Ok(_) => {}
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(RepositoryError::AlreadyInitialized.into());
            }
            Err(err) => return Err(err).context("Failed to create HEAD file"),
        }

        let index = self.index();
        let index = index.lock().await;
        // seed the index file unless a previous partial init left one behind
        if !index.path().exists() {
            fs::write(index.path(), b"[]").context("Failed to create .shelf/index file")?;
        }

        Ok(())
    }
}
