//! Line diff capability
//!
//! The diff reconstruction never names a concrete algorithm: it asks a
//! [`LineDiff`] for spans and renders whatever comes back. The default
//! implementation is Myers (see [`super::myers`]), but anything producing
//! coalesced spans plugs in.

use derive_new::new;

/// Classification of one span in a line diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Lines present only in the after text
    Added,
    /// Lines present only in the before text
    Removed,
    /// Lines common to both texts
    Unchanged,
}

/// A run of consecutive lines sharing one classification
///
/// The text covers all lines of the run with their terminators kept, so
/// concatenating the added and unchanged spans of a diff reproduces the
/// after text exactly.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Span {
    kind: SpanKind,
    text: String,
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Line-level difference capability
///
/// Implementations compare two texts line by line and report runs of added,
/// removed and unchanged lines. Adjacent lines with the same classification
/// must be coalesced into a single span; a diff never contains two
/// consecutive spans of the same kind.
pub trait LineDiff {
    /// Compare two texts line by line
    ///
    /// Lines keep their terminators; a final line without a newline is a
    /// line of its own. Identical inputs yield one unchanged span covering
    /// the whole text (none at all when both are empty).
    fn diff_lines(&self, before: &str, after: &str) -> Vec<Span>;
}
