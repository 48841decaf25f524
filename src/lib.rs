//! A minimal content-addressable version control system
//!
//! Shelf records snapshots of files as immutable objects addressed by the
//! SHA-1 of their content. The crate is split into three layers:
//!
//! - `areas`: the on-disk parts of a repository (object database, staging
//!   index, refs, workspace) and the `Repository` facade that ties them
//!   together
//! - `artifacts`: the records stored in those areas (blobs, commits, staged
//!   entries) plus history traversal and diff computation
//! - `commands`: the plumbing and porcelain operations exposed by the CLI

pub mod areas;
pub mod artifacts;
pub mod commands;
