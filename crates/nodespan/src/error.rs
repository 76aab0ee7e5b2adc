//! Error types for nodespan.
//!
//! Every failure the tool can hit is a variant of [`Error`]. Variants fall
//! into two groups:
//!
//! - **Reportable**: usage problems, unreadable input files and a missing
//!   root child. The binary prints them and exits with status 1.
//! - **Fatal**: the parsing engine itself refused to run. There is no
//!   recovery policy for this, so the binary aborts instead of exiting
//!   normally.
//!
//! A syntax error inside the input is *not* an error here. Tree-sitter
//! recovers from malformed input and still hands back a tree.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for nodespan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for nodespan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments or an unknown flag.
    ///
    /// Holds the fully rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// The input file could not be read
    #[error("error reading file {}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Tree-sitter parsing infrastructure failed
    #[error("parser error: {0}")]
    Parser(String),

    /// The root node has no child at the requested position
    #[error("root node has {child_count} children, no child at index {index}")]
    ChildIndex {
        /// Requested child position (0-based)
        index: usize,
        /// Number of children the root actually has
        child_count: usize,
    },
}

impl Error {
    /// Exit status used when the error is reported through the normal path.
    pub const EXIT_FAILURE: u8 = 1;

    /// Exit status of a process that panicked.
    pub const EXIT_PANIC: u8 = 101;

    /// Create an I/O error for a file.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the process must abort rather than exit normally.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Parser(_))
    }

    /// Exit status the process ends with for this error.
    ///
    /// Fatal errors are raised as a panic, so they end with Rust's panic
    /// status rather than the usual failure code.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            Self::EXIT_PANIC
        } else {
            Self::EXIT_FAILURE
        }
    }
}
