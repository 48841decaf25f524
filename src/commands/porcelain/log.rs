use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print the commit chain from HEAD back to the first commit
    ///
    /// A repository without commits prints nothing. A chain broken by a
    /// missing or unreadable record fails with the corrupt-history error
    /// after the reachable commits have been printed.
    pub fn log(&self) -> anyhow::Result<()> {
        for item in RevList::new(self).into_iter()? {
            let (commit_oid, commit) = item?;

            self.show_commit_medium(&commit_oid, &commit)?;
            writeln!(self.writer())?;
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", commit_oid)?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
