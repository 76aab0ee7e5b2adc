//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Directory holding the checked-in Nix fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Run the nodespan binary with the given arguments
pub fn run_nodespan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nodespan"))
        .args(args)
        // Keep stderr free of user log settings
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute nodespan binary")
}

/// Run the nodespan binary on a single file
pub fn run_on_file(path: &Path) -> Output {
    let path = path.to_str().expect("fixture path should be UTF-8");
    run_nodespan(&[path])
}

/// Span of root child `index` according to a direct tree-sitter parse
pub fn reference_span(content: &[u8], index: usize) -> Option<(usize, usize)> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_nix::LANGUAGE.into())
        .expect("nix grammar should load");
    let tree = parser.parse(content, None).expect("parse should succeed");
    let child = tree.root_node().child(index)?;
    Some((child.start_byte(), child.end_byte()))
}

/// Standard output as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
