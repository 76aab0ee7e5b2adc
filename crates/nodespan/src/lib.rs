//! # nodespan: byte offsets of a Nix syntax-tree node
//!
//! nodespan loads one Nix file, parses it with tree-sitter and reports the
//! start and end byte of a single child of the root node (index 4 unless
//! configured otherwise).
//!
//! All structural analysis is done by `tree-sitter` and `tree-sitter-nix`.
//! This crate only wires them together:
//!
//! 1. [`loader`] reads the file
//! 2. [`parser`] runs the grammar over the bytes
//! 3. [`tree`] picks the child, with an explicit bounds check
//! 4. [`report`] renders the result
//!
//! ## Quick Start
//!
//! ```no_run
//! use nodespan::Config;
//!
//! let report = nodespan::run(&Config::new("default.nix"))?;
//! print!("{report}");
//! # Ok::<(), nodespan::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod grammar;
pub mod loader;
pub mod parser;
pub mod report;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use grammar::{Grammar, GrammarKind, NixGrammar};
pub use parser::SourceParser;
pub use report::Report;
pub use tree::{ByteSpan, DEFAULT_CHILD_INDEX, SpanNode};

use tracing::info;

/// Load, parse and report on the file described by `config`.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Parser`] if tree-sitter cannot be invoked
/// - [`Error::ChildIndex`] if the root has no child at `config.child_index`
pub fn run(config: &Config) -> Result<Report> {
    let grammar = config.grammar.provider();
    let content = loader::load_source(&config.path, grammar)?;

    let mut parser = SourceParser::new(grammar)?;
    let syntax_tree = parser.parse(&content)?;

    let span = tree::child_span(&syntax_tree.root_node(), config.child_index)?;
    info!(
        path = %config.path.display(),
        index = config.child_index,
        start = span.start,
        end = span.end,
        "Reporting child span"
    );

    Ok(Report::new(span))
}
