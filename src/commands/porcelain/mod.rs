//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands provide the high-level user interface for version
//! control. Each one follows the same shape: rehydrate state from disk,
//! apply the operation, persist, report through the injected writer.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Record the staged files as a new commit
//! - `log`: Show the commit chain from HEAD
//! - `show`: Show the changes a commit introduced

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
