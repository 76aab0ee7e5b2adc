//! Offset report printed on success.

use std::fmt;

use crate::tree::ByteSpan;

/// First line of every report.
pub const HEADER: &str = "Syntax Tree:";

/// The three-line report for one child node.
///
/// ```text
/// Syntax Tree:
/// tree: <start byte>
/// root: <end byte>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Span of the selected child
    pub span: ByteSpan,
}

impl Report {
    /// Report for `span`.
    #[must_use]
    pub fn new(span: ByteSpan) -> Self {
        Self { span }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "tree: {}", self.span.start)?;
        writeln!(f, "root: {}", self.span.end)
    }
}
