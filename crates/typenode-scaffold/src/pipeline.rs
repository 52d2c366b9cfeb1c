//! The scaffold pipeline
//!
//! A [`ScaffoldPlan`] is built from [`ScaffoldOptions`] as an ordered list of
//! named stages. [`Scaffolder`] executes it front to back: each action is
//! awaited before the next starts, the first failure stops the run, and
//! nothing already done is undone.

use crate::error::{Error, Result};
use crate::manifest;
use crate::process::{CommandRunner, Invocation, SystemRunner};
use crate::templates;
use crate::tsconfig::{self, CompilerOptions};
use crate::types::{
    PackageManager, ScaffoldOptions, LINT_DEPENDENCIES, TEST_DEPENDENCY, TYPESCRIPT_DEPENDENCIES,
};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Placeholder entry file name inside the source directory
pub const ENTRY_FILE: &str = "index.ts";

/// Placeholder entry file content
pub const ENTRY_CONTENT: &str = "console.log(\"hello world\");\n";

/// A single unit of work
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run an external command
    Run(Invocation),
    /// Merge entries into the manifest's `scripts`
    MergeScripts(Vec<(String, String)>),
    /// Write project compiler options into `tsconfig.json`
    WriteTsConfig(CompilerOptions),
    /// Copy the bundled lint configuration
    CopyLintConfig,
    /// Create the source directory and its placeholder entry file
    CreateSourceDir { dir: String },
    /// Copy the bundled CI template tree for a package manager
    CopyCiTemplates(PackageManager),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Run(invocation) => write!(f, "run `{}`", invocation),
            Self::MergeScripts(scripts) => {
                let names: Vec<&str> = scripts.iter().map(|(name, _)| name.as_str()).collect();
                write!(f, "add scripts to {}: {}", manifest::MANIFEST_FILE, names.join(", "))
            }
            Self::WriteTsConfig(_) => write!(f, "write {}", tsconfig::TSCONFIG_FILE),
            Self::CopyLintConfig => write!(f, "copy {}", templates::LINT_CONFIG_FILE),
            Self::CreateSourceDir { dir } => write!(f, "create {}/{}", dir, ENTRY_FILE),
            Self::CopyCiTemplates(pm) => write!(
                f,
                "copy {} CI templates: {}",
                pm,
                templates::ci_template_paths(*pm).join(", ")
            ),
        }
    }
}

/// A named group of actions
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: &'static str,
    pub description: &'static str,
    pub actions: Vec<Action>,
}

impl Stage {
    fn new(name: &'static str, description: &'static str, actions: Vec<Action>) -> Self {
        Self {
            name,
            description,
            actions,
        }
    }
}

fn install_all(package_manager: PackageManager, dependencies: &[&str]) -> Vec<Action> {
    dependencies
        .iter()
        .map(|dep| {
            Action::Run(Invocation::new(
                package_manager.program(),
                package_manager.install_dev_args(dep),
            ))
        })
        .collect()
}

fn scripts(entries: &[(&str, &str)]) -> Action {
    Action::MergeScripts(
        entries
            .iter()
            .map(|(name, command)| (name.to_string(), command.to_string()))
            .collect(),
    )
}

/// Ordered scaffold stages for a set of options
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldPlan {
    stages: Vec<Stage>,
}

impl ScaffoldPlan {
    /// Build the plan
    pub fn new(options: &ScaffoldOptions) -> Result<Self> {
        let pm = options.package_manager;
        let compiler_options = CompilerOptions::for_source_dir(&options.source_dir);
        let mut stages = Vec::new();

        stages.push(Stage::new(
            "manifest",
            "Create package.json",
            vec![Action::Run(Invocation::new(pm.program(), pm.init_args()))],
        ));

        stages.push(Stage::new(
            "typescript",
            "Install TypeScript tooling",
            install_all(pm, TYPESCRIPT_DEPENDENCIES),
        ));

        stages.push(Stage::new(
            "tsconfig",
            "Configure the TypeScript compiler",
            vec![
                Action::Run(tsconfig::init_invocation(pm, &compiler_options)?),
                Action::WriteTsConfig(compiler_options.clone()),
            ],
        ));

        let dev_command = format!(
            "nodemon --watch '{src}/**' --ext 'ts,json' --ignore '{src}/**/*.spec.ts' --ignore '{src}/**/*.test.ts' --exec 'ts-node {src}/{entry}'",
            src = options.source_dir,
            entry = ENTRY_FILE,
        );
        stages.push(Stage::new(
            "scripts",
            "Add build and run scripts",
            vec![scripts(&[
                ("start", "node dist/index.js"),
                ("build", "tsc"),
                ("dev", dev_command.as_str()),
            ])],
        ));

        let mut lint = install_all(pm, LINT_DEPENDENCIES);
        lint.push(Action::CopyLintConfig);
        lint.push(Action::MergeScripts(options.lint.scripts()));
        stages.push(Stage::new("lint", "Set up ESLint", lint));

        if options.include_tests {
            let mut tests = install_all(pm, &[TEST_DEPENDENCY]);
            tests.push(scripts(&[("test", "jest")]));
            stages.push(Stage::new("tests", "Set up the test runner", tests));
        }

        stages.push(Stage::new(
            "source",
            "Create the source directory",
            vec![Action::CreateSourceDir {
                dir: options.source_dir.clone(),
            }],
        ));

        if options.include_ci {
            stages.push(Stage::new(
                "ci",
                "Copy CI templates",
                vec![Action::CopyCiTemplates(pm)],
            ));
        }

        Ok(Self { stages })
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Every external command the plan will run, in order
    pub fn invocations(&self) -> Vec<&Invocation> {
        self.stages
            .iter()
            .flat_map(|stage| &stage.actions)
            .filter_map(|action| match action {
                Action::Run(invocation) => Some(invocation),
                _ => None,
            })
            .collect()
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Stage names, in the order they finished
    pub completed_stages: Vec<&'static str>,
    /// Files written directly by the scaffolder (not by external tools)
    pub files_written: Vec<Utf8PathBuf>,
}

/// Executes a [`ScaffoldPlan`] in a project directory
#[derive(Debug)]
pub struct Scaffolder<R: CommandRunner> {
    runner: R,
    project_dir: Utf8PathBuf,
}

impl<R: CommandRunner> Scaffolder<R> {
    /// Create a scaffolder that runs commands through `runner`
    pub fn new(runner: R, project_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            runner,
            project_dir: project_dir.into(),
        }
    }

    /// Project directory all work happens in
    pub fn project_dir(&self) -> &Utf8Path {
        &self.project_dir
    }

    /// Access the runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute every stage in order, stopping at the first failure
    pub async fn run(&self, plan: &ScaffoldPlan) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        let total = plan.stages().len();

        for (index, stage) in plan.stages().iter().enumerate() {
            info!("[{}/{}] {}", index + 1, total, stage.description);

            for action in &stage.actions {
                debug!("{}: {}", stage.name, action);
                self.execute(action, &mut report).await?;
            }

            report.completed_stages.push(stage.name);
        }

        Ok(report)
    }

    async fn execute(&self, action: &Action, report: &mut ScaffoldReport) -> Result<()> {
        let dir = self.project_dir.as_path();

        match action {
            Action::Run(invocation) => self.runner.run(invocation, dir).await,
            Action::MergeScripts(entries) => {
                manifest::update_scripts(dir, entries.iter().cloned()).await?;
                Ok(())
            }
            Action::WriteTsConfig(options) => {
                report
                    .files_written
                    .push(tsconfig::write_tsconfig(dir, options).await?);
                Ok(())
            }
            Action::CopyLintConfig => {
                report
                    .files_written
                    .push(templates::copy_lint_config(dir).await?);
                Ok(())
            }
            Action::CreateSourceDir { dir: source_dir } => {
                report
                    .files_written
                    .push(create_source_dir(dir, source_dir).await?);
                Ok(())
            }
            Action::CopyCiTemplates(pm) => {
                report
                    .files_written
                    .extend(templates::copy_ci_templates(dir, *pm).await?);
                Ok(())
            }
        }
    }
}

/// Create `source_dir` and its entry file; an existing directory is an error
async fn create_source_dir(project_dir: &Utf8Path, source_dir: &str) -> Result<Utf8PathBuf> {
    let path = project_dir.join(source_dir);

    tokio::fs::create_dir(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::source_dir_exists(path.as_str())
        } else {
            Error::Io(e)
        }
    })?;

    let entry = path.join(ENTRY_FILE);
    tokio::fs::write(&entry, ENTRY_CONTENT).await?;
    debug!("Wrote {}", entry);

    Ok(entry)
}

/// Plan and run a scaffold with the system process runner
pub async fn scaffold(project_dir: &Utf8Path, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
    let plan = ScaffoldPlan::new(options)?;
    Scaffolder::new(SystemRunner::new(), project_dir).run(&plan).await
}
