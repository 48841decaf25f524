//! Object types and hashing
//!
//! Everything the repository remembers is an object identified by the SHA-1
//! of its serialized bytes. There are two kinds:
//!
//! - **Blob**: File content, stored verbatim
//! - **Commit**: JSON snapshot record (timestamp, message, staged files, parent)
//!
//! Both are written through the same store path, so a commit's ID is computed
//! exactly like a blob's. There are no type headers; a reader knows what it
//! loaded by how it parses.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
