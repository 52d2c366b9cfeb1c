//! External process invocation
//!
//! Every package manager and compiler call goes through [`CommandRunner`] so
//! the pipeline can be exercised without touching a real toolchain.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A single external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs invocations to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` in `cwd` and wait for it to exit.
    ///
    /// Returns `Ok(())` only when the process exits successfully.
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()>;
}

/// Runs invocations as child processes with inherited standard streams
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()> {
        debug!("Running: {} (in {})", invocation, cwd);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::command_not_found(&invocation.program)
                } else {
                    Error::Io(e)
                }
            })?;

        if !status.success() {
            return Err(Error::command_failed(invocation.to_string(), status.code()));
        }

        Ok(())
    }
}
