//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use typenode_scaffold::{PackageManager, ScaffoldOptions};

/// typenode - Scaffold TypeScript Node.js projects
#[derive(Parser, Debug)]
#[command(name = "typenode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to typenode.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a TypeScript project
    Init(InitArgs),
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Use yarn instead of npm
    #[arg(long)]
    pub yarn: bool,

    /// Copy the CI templates into .github/
    #[arg(long)]
    pub ci: bool,

    /// Do not install a test runner
    #[arg(long)]
    pub skip_tests: bool,

    /// Path passed to eslint by the lint scripts
    #[arg(long, value_name = "PATH")]
    pub lint_target: Option<String>,

    /// Project directory
    #[arg(short, long, default_value = ".")]
    pub dir: Utf8PathBuf,

    /// Print the plan without running anything
    #[arg(long)]
    pub dry_run: bool,
}

impl InitArgs {
    /// Apply flag overrides on top of options resolved from defaults and config.
    /// Flags only ever switch away from the defaults; an absent flag leaves the
    /// configured value alone.
    pub fn apply(&self, mut options: ScaffoldOptions) -> ScaffoldOptions {
        if self.yarn {
            options.package_manager = PackageManager::Yarn;
        }
        if self.ci {
            options.include_ci = true;
        }
        if self.skip_tests {
            options.include_tests = false;
        }
        if let Some(target) = &self.lint_target {
            options.lint.target = target.clone();
        }
        options
    }
}
