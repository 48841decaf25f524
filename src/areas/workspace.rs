use crate::artifacts::objects::blob::Blob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".shelf", ".", ".."];

/// Read-only view of the working tree
///
/// Resolves user-supplied paths against the repository root, reads file
/// content into blobs and expands directories into the files below them.
/// The repository's own `.shelf` directory is never listed.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a workspace file into a blob
    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// List the files under a path, relative to the workspace root
    ///
    /// A file path yields itself; a directory is walked recursively. With no
    /// path, the whole workspace is listed.
    // TODO: refactor to use iterator
    pub fn list_files(&self, root_file_path: Option<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => std::fs::canonicalize(p)?,
            None => self.path.clone().into(),
        };

        // Check if the root_file_path exists
        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        if root_file_path.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
                .collect::<Vec<_>>())
        } else {
            Ok(vec![
                root_file_path
                    .strip_prefix(self.path.as_ref())
                    .map(PathBuf::from)
                    .unwrap_or_default(),
            ])
        }
    }

    fn is_ignored(path: &Path) -> bool {
        // Check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() && !Self::is_ignored(path) {
            Some(path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf())
        } else {
            None
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(file_path)?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::workspace::Workspace;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn workspace_with_files() -> (TempDir, Workspace) {
        let dir = TempDir::new().expect("temp dir");
        for (path, content) in [
            ("1.txt", "one"),
            ("a/2.txt", "two"),
            ("a/b/3.txt", "three"),
            (".shelf/objects/stored", "never listed"),
        ] {
            let path = dir.path().join(path);
            std::fs::create_dir_all(path.parent().expect("parent dir")).expect("dirs created");
            std::fs::write(path, content).expect("file written");
        }

        let root = dir.path().canonicalize().expect("canonical root");
        let workspace = Workspace::new(root.into_boxed_path());
        (dir, workspace)
    }

    #[test]
    fn test_listing_walks_files_in_name_order_and_skips_the_metadata_dir() {
        let (_dir, workspace) = workspace_with_files();

        let files = workspace.list_files(None).expect("workspace listed");

        assert_eq!(
            files,
            vec![
                PathBuf::from("1.txt"),
                PathBuf::from("a/2.txt"),
                PathBuf::from("a/b/3.txt"),
            ]
        );
    }

    #[test]
    fn test_listing_a_subdirectory_is_scoped_to_it() {
        let (_dir, workspace) = workspace_with_files();

        let files = workspace
            .list_files(Some(workspace.path().join("a")))
            .expect("workspace listed");

        assert_eq!(
            files,
            vec![PathBuf::from("a/2.txt"), PathBuf::from("a/b/3.txt")]
        );
    }

    #[test]
    fn test_listing_a_file_path_yields_it_relative_to_the_root() {
        let (_dir, workspace) = workspace_with_files();

        let files = workspace
            .list_files(Some(workspace.path().join("a").join("2.txt")))
            .expect("workspace listed");

        assert_eq!(files, vec![PathBuf::from("a/2.txt")]);
    }

    #[test]
    fn test_listing_a_missing_path_fails() {
        let (_dir, workspace) = workspace_with_files();

        let missing = workspace.path().join("missing.txt");
        assert!(workspace.list_files(Some(missing)).is_err());
    }

    #[test]
    fn test_read_file_resolves_against_the_root() {
        let (_dir, workspace) = workspace_with_files();

        let content = workspace
            .read_file(&PathBuf::from("a/2.txt"))
            .expect("file readable");

        assert_eq!(content, "two");
    }
}
