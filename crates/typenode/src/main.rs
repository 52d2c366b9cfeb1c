//! typenode CLI - Scaffold TypeScript Node.js projects

mod cli;
mod commands;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use output::Printer;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let out = Printer::new(cli.quiet);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args, cli.config.as_deref(), out).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Printer::failure(format_args!("{:#}", e));
            ExitCode::from(exit_code(&e))
        }
    }
}

/// A failed child's own exit code, 127 for a missing program, 1 otherwise
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<typenode_scaffold::Error>()
        .and_then(|e| u8::try_from(e.exit_code()).ok())
        .unwrap_or(1)
}

/// Level implied by `-q` / `-v`; `None` defers to `RUST_LOG`, then `info`
fn flag_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Logs go to stderr so stdout carries only status lines
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = match flag_level(verbose, quiet) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenode_scaffold::Error;

    #[test]
    fn test_exit_code_from_failed_command() {
        let err = anyhow::Error::new(Error::command_failed("npm install -D jest", Some(2)));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = anyhow::Error::new(Error::command_not_found("yarn")).context("scaffold failed");
        assert_eq!(exit_code(&err), 127);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
        let err = anyhow::Error::new(Error::source_dir_exists("src"));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_flag_level() {
        assert_eq!(flag_level(0, false), None);
        assert_eq!(flag_level(1, false), Some("debug"));
        assert_eq!(flag_level(3, false), Some("trace"));
        assert_eq!(flag_level(2, true), Some("error"));
    }
}
