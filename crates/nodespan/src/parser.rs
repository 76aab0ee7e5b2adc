//! Tree-sitter parsing coordination.
//!
//! Wraps a `tree_sitter::Parser` configured for one [`Grammar`] and turns its
//! two failure points into [`Error::Parser`]:
//!
//! - `set_language` rejects a grammar built for an incompatible ABI
//! - `parse` returns `None` (no language set, or the parse was cancelled)
//!
//! Both are invocation failures. Syntax errors in the source are not: the
//! returned tree simply contains `ERROR` nodes.

use tracing::debug;

use crate::error::{Error, Result};
use crate::grammar::Grammar;

/// A tree-sitter parser bound to a single grammar.
pub struct SourceParser {
    grammar: &'static dyn Grammar,
    parser: tree_sitter::Parser,
}

impl SourceParser {
    /// Create a parser for `grammar`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if tree-sitter rejects the grammar.
    pub fn new(grammar: &'static dyn Grammar) -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&grammar.tree_sitter_language())
            .map_err(|e| {
                Error::Parser(format!("cannot load {} grammar: {e}", grammar.name()))
            })?;

        Ok(Self { grammar, parser })
    }

    /// The grammar this parser was built for.
    #[must_use]
    pub fn grammar(&self) -> &'static dyn Grammar {
        self.grammar
    }

    /// Parse `content` into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if tree-sitter produces no tree.
    pub fn parse(&mut self, content: &[u8]) -> Result<tree_sitter::Tree> {
        debug!(
            grammar = self.grammar.name(),
            bytes = content.len(),
            "Parsing source"
        );

        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| Error::Parser("failed to parse file".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            // Tree-sitter recovered; offsets are still meaningful
            debug!(kind = root.kind(), "Source contains syntax errors");
        }
        debug!(
            kind = root.kind(),
            children = root.child_count(),
            "Parsed syntax tree"
        );

        Ok(tree)
    }
}
