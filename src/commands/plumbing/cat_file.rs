use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the stored bytes of an object
    ///
    /// Objects are stored verbatim, so this prints blob content as-is and
    /// commit records as their JSON form. Accepts a full object ID or a
    /// unique prefix.
    pub fn cat_file(&self, revision: &str) -> anyhow::Result<()> {
        let object_id = self.database().resolve_prefix(revision)?;
        let object_data = self.database().load(&object_id)?;
        let object_data = String::from_utf8(object_data.to_vec())?;

        write!(self.writer(), "{}", object_data)?;

        Ok(())
    }
}
