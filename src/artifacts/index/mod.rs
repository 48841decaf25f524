//! Staging index data model
//!
//! The index (staging area) queues the files that will make up the next
//! commit. On disk it is a JSON array of entries, `[]` when nothing is
//! staged, and the commit operation copies the whole array into the commit
//! record before clearing it.

pub mod staged_entry;
