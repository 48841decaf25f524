use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    /// Hash a workspace file, optionally storing the blob
    ///
    /// Prints the object ID the file's content hashes to. With `write` set,
    /// the blob is also stored, which is exactly what staging does minus the
    /// index entry.
    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<()> {
        // read object file
        let object_data = self.workspace().read_file(object_path.as_ref())?;
        let object = Blob::new(object_data);

        let object_id = if write {
            self.database().store(&object)?
        } else {
            object.object_id()?
        };

        write!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
