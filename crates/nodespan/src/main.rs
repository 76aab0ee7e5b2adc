//! nodespan CLI - byte offsets of a Nix syntax-tree node.
//!
//! Parses one file with tree-sitter-nix and prints the start and end byte of
//! a child of the root node.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use nodespan::{Config, DEFAULT_CHILD_INDEX, Error, GrammarKind};
use tracing_subscriber::EnvFilter;

/// nodespan: print the byte span of a root child in a syntax tree.
#[derive(Parser)]
#[command(name = "nodespan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Nix file to parse
    path: PathBuf,

    /// Position of the reported node among the root's children
    #[arg(long, default_value_t = DEFAULT_CHILD_INDEX)]
    child_index: usize,

    /// Grammar used to parse the file
    #[arg(long, value_enum, default_value_t = GrammarKind::Nix)]
    grammar: GrammarKind,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(&self.path)
            .with_child_index(self.child_index)
            .with_grammar(self.grammar)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version arrive here too and are not failures
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return report_error(&Error::Usage(e.render().to_string())),
    };

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match nodespan::run(&cli.config()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_fatal() => panic!("{e}"),
        Err(e) => report_error(&e),
    }
}

/// Print `error` and its cause chain to stderr.
fn report_error(error: &Error) -> ExitCode {
    if let Error::Usage(usage) = error {
        // Already rendered by clap, including the usage line
        eprint!("{usage}");
        return ExitCode::from(error.exit_code());
    }

    eprintln!("{}: {error}", "error".red().bold());
    // Show cause chain for nested errors
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    ExitCode::from(error.exit_code())
}
