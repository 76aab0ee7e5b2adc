//! Loading the input file.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grammar::Grammar;

/// Read the whole file at `path` into memory.
///
/// A path that does not look like a `grammar` source is still read; the
/// mismatch is only logged.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read for any reason.
pub fn load_source(path: &Path, grammar: &dyn Grammar) -> Result<Vec<u8>> {
    if !grammar.matches_extension(path) {
        warn!(
            path = %path.display(),
            grammar = grammar.name(),
            "Input does not have a {} extension",
            grammar.name()
        );
    }

    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded source file");

    Ok(content)
}
