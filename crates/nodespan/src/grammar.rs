//! Grammar providers.
//!
//! A grammar provider hands the parsing engine an opaque
//! `tree_sitter::Language`. The orchestration code only ever sees the
//! [`Grammar`] trait, so swapping the grammar means adding a provider and a
//! [`GrammarKind`] variant, nothing else.
//!
//! ## Adding a Grammar
//!
//! 1. Add the grammar crate to the workspace dependencies
//! 2. Implement `Grammar` for a unit struct
//! 3. Add a `GrammarKind` variant and map it in `GrammarKind::provider()`

/// Trait for a tree-sitter grammar the tool can parse with.
pub trait Grammar: Send + Sync {
    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// File extensions this grammar normally handles.
    fn extensions(&self) -> &[&str];

    /// Get the tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Returns `true` if `path` carries one of this grammar's extensions.
    fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}

/// The Nix expression language, via `tree-sitter-nix`.
pub struct NixGrammar;

impl Grammar for NixGrammar {
    fn name(&self) -> &'static str {
        "nix"
    }

    fn extensions(&self) -> &[&str] {
        &["nix"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_nix::LANGUAGE.into()
    }
}

/// Grammars selectable at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GrammarKind {
    /// Nix expression language
    #[default]
    Nix,
}

impl GrammarKind {
    /// Get the provider for this grammar.
    #[must_use]
    pub fn provider(self) -> &'static dyn Grammar {
        match self {
            Self::Nix => &NixGrammar,
        }
    }
}

impl std::fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.provider().name())
    }
}
