use crate::areas::repository::Repository;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Lazy walk of the commit chain, newest first
///
/// Starts from whatever HEAD points at when the iterator is created and
/// follows parent links one commit per step; nothing is loaded until the
/// iterator is advanced. A repository without commits yields an empty walk.
///
/// Each item is a `Result`: when a commit names a parent whose record cannot
/// be loaded, the walk yields one [`RepositoryError::CorruptHistory`] error
/// naming that object ID and then ends. A broken chain is reported, never
/// silently truncated.
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
}

impl<'r> RevList<'r> {
    pub fn into_iter(self) -> anyhow::Result<RevListIntoIter<'r>> {
        Ok(RevListIntoIter {
            repository: self.repository,
            current_commit_oid: self.repository.refs().read_head()?,
        })
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    repository: &'r Repository,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.repository.database().load_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(err) => {
                // current_commit_oid stays None, so the walk ends after
                // reporting the unresolvable commit
                Some(Err(err.context(RepositoryError::CorruptHistory {
                    oid: commit_oid,
                })))
            }
        }
    }
}
