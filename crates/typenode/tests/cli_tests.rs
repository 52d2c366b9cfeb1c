//! Integration tests for the typenode binary
//!
//! These run the compiled CLI without network access: dry runs, quiet
//! mode, and failure paths where the package manager is not on PATH.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn typenode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typenode"))
        .args(args)
        .output()
        .expect("failed to run typenode")
}

/// Run with an empty PATH so npm/yarn cannot be found
fn typenode_without_tools(args: &[&str], empty_bin: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typenode"))
        .args(args)
        .env("PATH", empty_bin)
        .output()
        .expect("failed to run typenode")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ─── Commands ──────────────────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let output = typenode(&["--version"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("typenode {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_dry_run_prints_plan_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    let output = typenode(&["init", "--dir", dir, "--dry-run", "--yarn", "--ci", "--skip-tests"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("yarn init -y"));
    assert!(text.contains("yarn add typescript --dev"));
    assert!(text.contains("Copy CI templates"));
    assert!(!text.contains("jest"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_quiet_suppresses_status_lines() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    let output = typenode(&["init", "--dir", dir, "--dry-run", "-q"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_quiet_still_reports_errors() {
    let temp_dir = TempDir::new().unwrap();
    let empty_bin = temp_dir.path().join("bin");
    std::fs::create_dir(&empty_bin).unwrap();
    let project = temp_dir.path().join("app");

    let output = typenode_without_tools(
        &["init", "-q", "--dir", project.to_str().unwrap()],
        &empty_bin,
    );

    assert_eq!(output.status.code(), Some(127));
    assert_eq!(stdout(&output), "");
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_missing_package_manager_exits_127() {
    let temp_dir = TempDir::new().unwrap();
    let empty_bin = temp_dir.path().join("bin");
    std::fs::create_dir(&empty_bin).unwrap();
    let project = temp_dir.path().join("app");

    let output = typenode_without_tools(
        &["init", "--dir", project.to_str().unwrap()],
        &empty_bin,
    );

    assert_eq!(output.status.code(), Some(127));
    assert!(String::from_utf8_lossy(&output.stderr).contains("npm"));
    // The pipeline stopped at the first stage
    assert!(!project.join("src").exists());
    assert!(!project.join("package.json").exists());
}

#[test]
fn test_invalid_config_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("typenode.yaml"), "source-dir: /abs\n").unwrap();

    let output = typenode(&["init", "--dir", temp_dir.path().to_str().unwrap(), "--dry-run"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let output = typenode(&["deploy"]);
    assert_eq!(output.status.code(), Some(2));
}
