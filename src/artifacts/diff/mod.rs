//! Diff computation and reconstruction
//!
//! Three layers, from algorithm to report:
//!
//! - `line_diff`: the span model and the pluggable [`line_diff::LineDiff`]
//!   capability
//! - `myers`: the default shortest-edit-script implementation
//! - `commit_diff`: per-file change reports for a commit, rebuilt from the
//!   object store

pub mod commit_diff;
pub mod line_diff;
pub mod myers;
