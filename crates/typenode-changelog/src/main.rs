//! build-changelog - write a changelog entry for a pull request
//!
//! Reads CHANGELOG_TITLE, CHANGELOG_DESCRIPTION and CHANGELOG_ID from the
//! environment. Exits 1 only when one of them is missing or an entry cannot
//! be written; skips are successful no-ops.

use camino::Utf8PathBuf;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::Level;
use typenode_changelog::{ChangelogInputs, ChangelogWriter, WriteOutcome, DEFAULT_DIR};

/// Write a changelog entry derived from pull request metadata
#[derive(Parser, Debug)]
#[command(name = "build-changelog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory entries are written to
    #[arg(short, long, default_value = DEFAULT_DIR)]
    dir: Utf8PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = ChangelogInputs::from_env()
        .and_then(|inputs| ChangelogWriter::new(cli.dir).write(&inputs));

    match result {
        Ok(WriteOutcome::Written(path)) => {
            if !cli.quiet {
                println!("{} Changelog entry written to {}", style("✓").green().bold(), path);
            }
            ExitCode::SUCCESS
        }
        Ok(WriteOutcome::AlreadyExists(_) | WriteOutcome::Unrecognized) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("✗").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr at a level picked by `-q` / `-v`
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
