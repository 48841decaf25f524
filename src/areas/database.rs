use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Content-addressable object store over a flat directory
///
/// Every object lives at `objects/<oid>` where the file name is the full
/// 40-character SHA-1 of the file's bytes. Blobs and commit records go
/// through the same two operations, `store` and `load`, and the bytes on
/// disk are exactly the serialized object (no compression, no headers).
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: refactor to use async fs operations
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its ID
    ///
    /// Storing is idempotent: when a file for the object's hash already
    /// exists its content is already correct, so the write is skipped and
    /// the store is left untouched.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if !object_path.exists() {
            let object_content = object.serialize()?;
            self.write_object(object_path, object_content)?;
        }

        Ok(object_id)
    }

    /// Load the raw stored bytes of an object
    ///
    /// Fails with [`RepositoryError::ObjectNotFound`] when no object with
    /// this ID exists.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(RepositoryError::ObjectNotFound {
                oid: object_id.clone(),
            }
            .into());
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    /// Check whether an object with this ID is present
    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Load an object and parse it as a commit record
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_content = self.load(object_id)?;

        Commit::deserialize(Cursor::new(object_content))
            .context(format!("Object {object_id} is not a commit record"))
    }

    /// Load an object and parse it as a blob
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_content = self.load(object_id)?;

        Blob::deserialize(Cursor::new(object_content))
            .context(format!("Object {object_id} is not a text blob"))
    }

    /// Resolve an abbreviated object ID to the single object it names
    ///
    /// The full 40-character form is accepted as-is. Shorter prefixes are
    /// matched against the store; a prefix naming no object fails with
    /// [`RepositoryError::ObjectNotFound`]-style reporting and an ambiguous
    /// prefix lists the candidates.
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        if let Ok(object_id) = ObjectId::try_parse(prefix.to_string()) {
            return Ok(object_id);
        }

        let matches = self.find_objects_by_prefix(prefix)?;

        match matches.as_slice() {
            [object_id] => Ok(object_id.clone()),
            [] => anyhow::bail!("no object matches prefix {prefix}"),
            candidates => {
                let listing = candidates
                    .iter()
                    .map(|oid| oid.to_short_oid())
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!("prefix {prefix} is ambiguous, candidates: {listing}")
            }
        }
    }

    /// Find all objects whose ID starts with the given prefix
    ///
    /// The store is one flat directory, so this is a single directory scan.
    fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid object ID prefix: {prefix}");
        }

        let mut matches = Vec::new();

        for entry in std::fs::read_dir(&self.path).context(format!(
            "Unable to read object directory {}",
            self.path.display()
        ))? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(prefix)
                && let Ok(oid) = ObjectId::try_parse(file_name.to_string())
            {
                matches.push(oid);
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::database::Database;
    use crate::artifacts::core::errors::RepositoryError;
    use crate::artifacts::objects::blob::Blob;
    use crate::artifacts::objects::object_id::ObjectId;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use proptest::proptest;
    use rstest::{fixture, rstest};

    #[fixture]
    fn objects_dir() -> TempDir {
        TempDir::new().expect("temp objects dir")
    }

    fn oid(raw: &str) -> ObjectId {
        ObjectId::try_parse(raw.to_string()).expect("valid oid")
    }

    #[rstest]
    fn test_store_is_idempotent(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());
        let blob = Blob::new("hello".to_string());

        let first = database.store(&blob).expect("first store");
        let second = database.store(&blob).expect("second store");

        assert_eq!(first, second);
        assert!(database.contains(&first));
        let stored_files = std::fs::read_dir(objects_dir.path())
            .expect("readable store")
            .count();
        assert_eq!(stored_files, 1);
    }

    #[rstest]
    fn test_load_returns_the_stored_bytes(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());
        let stored = database
            .store(&Blob::new("hello".to_string()))
            .expect("blob stored");

        let raw = database.load(&stored).expect("blob loads");
        assert_eq!(raw.as_ref(), b"hello");
    }

    #[rstest]
    fn test_loading_a_missing_object_reports_object_not_found(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());
        let missing = oid("deadbeefdeadbeefdeadbeefdeadbeefdeadbeef");

        assert!(!database.contains(&missing));
        let err = database.load(&missing).expect_err("load must fail");
        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::ObjectNotFound { oid: missing })
        );
    }

    #[rstest]
    fn test_resolve_prefix_accepts_a_full_oid(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());
        let full = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

        // a full oid resolves without consulting the store
        assert_eq!(database.resolve_prefix(full).expect("resolves"), oid(full));
    }

    #[rstest]
    fn test_resolve_prefix_finds_the_single_match(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());
        let stored = database
            .store(&Blob::new("hello".to_string()))
            .expect("blob stored");

        let resolved = database
            .resolve_prefix(&stored.as_ref()[..7])
            .expect("prefix resolves");
        assert_eq!(resolved, stored);
    }

    #[rstest]
    fn test_resolve_prefix_rejects_an_ambiguous_prefix(objects_dir: TempDir) {
        // resolution goes by file name, so the content is irrelevant here
        let database = Database::new(objects_dir.path().into());
        std::fs::write(objects_dir.path().join("a".repeat(40)), b"x").expect("object seeded");
        std::fs::write(objects_dir.path().join(format!("{}b", "a".repeat(39))), b"y")
            .expect("object seeded");

        let err = database
            .resolve_prefix("aaaa")
            .expect_err("ambiguous prefix must fail");
        assert!(err.to_string().contains("ambiguous"));
    }

    #[rstest]
    fn test_resolve_prefix_with_no_match_fails(objects_dir: TempDir) {
        let database = Database::new(objects_dir.path().into());

        let err = database
            .resolve_prefix("abc123")
            .expect_err("unknown prefix must fail");
        assert!(err.to_string().contains("no object matches prefix"));
    }

    proptest! {
        #[test]
        fn test_store_then_load_returns_the_original_content(
            content in "[a-zA-Z0-9 \n]{0,64}"
        ) {
            let objects_dir = TempDir::new().expect("temp objects dir");
            let database = Database::new(objects_dir.path().into());

            let stored = database.store(&Blob::new(content.clone())).expect("stores");
            let raw = database.load(&stored).expect("loads");

            assert_eq!(raw.as_ref(), content.as_bytes());
        }

        #[test]
        fn test_equal_content_stores_under_one_oid(
            content in "[a-zA-Z0-9 \n]{0,64}"
        ) {
            let objects_dir = TempDir::new().expect("temp objects dir");
            let database = Database::new(objects_dir.path().into());

            let first = database.store(&Blob::new(content.clone())).expect("first store");
            let second = database.store(&Blob::new(content)).expect("second store");

            assert_eq!(first, second);
            let stored_files = std::fs::read_dir(objects_dir.path())
                .expect("readable store")
                .count();
            assert_eq!(stored_files, 1);
        }

        #[test]
        fn test_distinct_content_stores_under_distinct_oids(
            left in "[a-z]{1,16}",
            right in "[A-Z]{1,16}"
        ) {
            // disjoint alphabets, the two contents never collide
            let objects_dir = TempDir::new().expect("temp objects dir");
            let database = Database::new(objects_dir.path().into());

            let left_oid = database.store(&Blob::new(left)).expect("left stored");
            let right_oid = database.store(&Blob::new(right)).expect("right stored");

            assert_ne!(left_oid, right_oid);
        }
    }
}
