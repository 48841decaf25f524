//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands expose the object store directly. They're primarily
//! used for scripting, for poking at a repository while debugging, and as
//! building blocks the porcelain commands are explained in terms of.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a file's object ID and optionally store the blob
//! - `cat-file`: Print the stored bytes of an object

pub mod cat_file;
pub mod hash_object;
