//! # typenode-scaffold
//!
//! Project scaffolding library for the typenode CLI providing:
//! - An ordered scaffold pipeline driving npm or yarn
//! - `package.json` script merging
//! - `tsconfig.json` generation
//! - Bundled lint and CI templates
//!
//! # Examples
//!
//! ## Scaffold the current directory with npm
//!
//! ```no_run
//! use typenode_scaffold::{scaffold, ScaffoldOptions};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = scaffold(Utf8Path::new("."), &ScaffoldOptions::default()).await?;
//! println!("completed: {:?}", report.completed_stages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspect the plan without running it
//!
//! ```
//! use typenode_scaffold::{PackageManager, ScaffoldOptions, ScaffoldPlan};
//!
//! let options = ScaffoldOptions::default()
//!     .with_package_manager(PackageManager::Yarn)
//!     .with_ci(true);
//! let plan = ScaffoldPlan::new(&options).unwrap();
//!
//! assert_eq!(plan.invocations()[0].to_string(), "yarn init -y");
//! assert_eq!(plan.stages().last().unwrap().name, "ci");
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod process;
pub mod templates;
pub mod tsconfig;
pub mod types;

pub use config::ConfigFile;
pub use error::{Error, Result};
pub use manifest::Manifest;
pub use pipeline::{scaffold, Action, ScaffoldPlan, ScaffoldReport, Scaffolder, Stage};
pub use process::{CommandRunner, Invocation, SystemRunner};
pub use types::{LintScripts, PackageManager, ScaffoldOptions};
