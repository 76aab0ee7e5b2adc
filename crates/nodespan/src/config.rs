//! Run configuration.
//!
//! Built once at startup from the command line and passed to [`crate::run`].

use std::path::PathBuf;

use crate::grammar::GrammarKind;
use crate::tree::DEFAULT_CHILD_INDEX;

/// Everything a single run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to parse
    pub path: PathBuf,
    /// Position of the reported child among the root's children
    pub child_index: usize,
    /// Grammar used to parse `path`
    pub grammar: GrammarKind,
}

impl Config {
    /// Configuration for `path` with the default grammar and child index.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            child_index: DEFAULT_CHILD_INDEX,
            grammar: GrammarKind::default(),
        }
    }

    /// Report a different root child.
    #[must_use]
    pub fn with_child_index(mut self, child_index: usize) -> Self {
        self.child_index = child_index;
        self
    }

    /// Parse with a different grammar.
    #[must_use]
    pub fn with_grammar(mut self, grammar: GrammarKind) -> Self {
        self.grammar = grammar;
        self
    }
}
