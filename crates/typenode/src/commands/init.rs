//! `typenode init` command handler

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::debug;
use typenode_scaffold::{scaffold, ConfigFile, ScaffoldOptions, ScaffoldPlan};

use crate::cli::InitArgs;
use crate::output::Printer;

pub async fn run(args: InitArgs, config: Option<&Utf8Path>, out: Printer) -> Result<()> {
    let options = resolve_options(&args, config)?;
    debug!("Resolved options: {:?}", options);
    let plan = ScaffoldPlan::new(&options)?;

    if args.dry_run {
        print_plan(out, &args.dir, &options, &plan);
        return Ok(());
    }

    out.title("Initialize TypeScript project");
    print_summary(out, &args.dir, &options);
    out.blank();

    tokio::fs::create_dir_all(&args.dir)
        .await
        .with_context(|| format!("Failed to create project directory {}", args.dir))?;

    let report = scaffold(&args.dir, &options).await?;

    out.blank();
    out.done(&format!(
        "Initialized TypeScript project in {} ({} stages)",
        args.dir,
        report.completed_stages.len()
    ));
    for file in &report.files_written {
        out.field("wrote", file);
    }
    out.note(&format!(
        "Start developing with `{} run dev`",
        options.package_manager
    ));

    Ok(())
}

/// Defaults, then the config file, then flags
fn resolve_options(args: &InitArgs, config: Option<&Utf8Path>) -> Result<ScaffoldOptions> {
    let file = ConfigFile::resolve(&args.dir, config).context("Failed to load configuration")?;
    Ok(args.apply(file.into_options()))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn print_summary(out: Printer, dir: &Utf8Path, options: &ScaffoldOptions) {
    out.field("Directory", dir);
    out.field("Package manager", options.package_manager);
    out.field("Source directory", &options.source_dir);
    out.field("Tests", yes_no(options.include_tests));
    out.field("CI templates", yes_no(options.include_ci));
}

fn print_plan(out: Printer, dir: &Utf8Path, options: &ScaffoldOptions, plan: &ScaffoldPlan) {
    out.title("Scaffold plan (dry run)");
    print_summary(out, dir, options);
    out.blank();

    let total = plan.stages().len();
    for (index, stage) in plan.stages().iter().enumerate() {
        let details: Vec<String> = stage.actions.iter().map(|a| a.to_string()).collect();
        out.stage(index + 1, total, stage.description, &details);
    }

    out.blank();
    out.note("Dry run: nothing was executed");
}
