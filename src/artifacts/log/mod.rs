//! Commit history traversal
//!
//! Implements the walk behind `log` and the parent lookups behind `show`:
//! a lazy iterator from HEAD back to the first commit, following single
//! parent links. History is linear, so there is no queueing or
//! deduplication; the one subtlety is error reporting when the chain is
//! broken mid-walk.

pub mod rev_list;
