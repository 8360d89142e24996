//! blamegrep - search tracked files by line content and last author
//!
//! # Usage
//! ```bash
//! blamegrep "TODO"                       # all tracked files
//! blamegrep "TODO" src/                  # one directory
//! blamegrep -a "Alice" unwrap lib.rs     # lines last touched by Alice
//! blamegrep -i -a bob --no-author-case fixme
//! ```
//!
//! Exits 0 when at least one match was printed, 1 otherwise.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blamegrep::{GitRepository, OutputOptions, Printer, Query, resolve_targets, search_file};

/// Search for lines matching a pattern, filtered by last-modifying author
#[derive(Parser)]
#[command(name = "blamegrep")]
#[command(about = "grep tracked files by line content and last author", long_about = None)]
struct Cli {
    /// Regular expression to search for
    pattern: String,

    /// Files or directories to search (default: all tracked files)
    paths: Vec<String>,

    /// Only report lines last modified by an author matching this regex
    #[arg(short, long, value_name = "REGEX")]
    author: Option<String>,

    /// Case-insensitive pattern matching
    #[arg(short, long)]
    ignore_case: bool,

    /// Case-insensitive author matching
    #[arg(long)]
    no_author_case: bool,

    /// Show line numbers (default: on)
    #[arg(short = 'n', long, default_value_t = true)]
    line_number: bool,

    /// Show author names (default: on)
    #[arg(long, default_value_t = true)]
    show_author: bool,

    /// Lines of context around matches (reserved, not implemented yet)
    #[arg(short = 'C', long, value_name = "NUM")]
    context: Option<u32>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("blamegrep: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Run the whole scan. `Ok(true)` means at least one match was printed.
///
/// Per-file failures (blame invocation, malformed porcelain) are reported
/// to stderr and the scan continues; only setup failures propagate.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let query = Query::new(
        &cli.pattern,
        cli.ignore_case,
        cli.author.as_deref(),
        cli.no_author_case,
    )?;

    let repo = GitRepository::discover(".")
        .context("cannot locate a git repository from the current directory")?;
    let files = resolve_targets(&repo, &cli.paths)?;

    if let Some(n) = cli.context {
        tracing::warn!(lines = n, "-C/--context is not implemented yet; ignoring");
    }

    let stdout = std::io::stdout();
    let mut printer = Printer::new(
        stdout.lock(),
        OutputOptions {
            line_numbers: cli.line_number,
            authors: cli.show_author,
        },
    );

    for file in &files {
        match search_file(&repo, file, &query) {
            Ok(matches) => {
                for m in &matches {
                    printer.print(m)?;
                }
            }
            Err(e) => eprintln!("blamegrep: {file}: {e}"),
        }
    }

    tracing::debug!(
        files = files.len(),
        matches = printer.match_count(),
        "scan complete"
    );
    Ok(printer.match_count() > 0)
}
