//! Blob object
//!
//! Blobs store file content. They contain only the raw text of the file,
//! without any metadata like filename or permissions (the index remembers
//! which path a blob was staged from).
//!
//! ## Format
//!
//! On disk: the content bytes, verbatim. A blob's object ID is therefore the
//! SHA-1 of the file content itself.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Each unique file content is stored as one blob, identified by its SHA-1
/// hash, so staging the same content twice stores it once.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Blob {
    /// File content as a string
    content: String,
}

impl Blob {
    /// Get the file content as a string
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.content.as_bytes()))
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        Ok(Self::new(content))
    }
}

impl Object for Blob {}
