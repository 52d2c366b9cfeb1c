//! End-to-end tests for the build-changelog binary
//!
//! Each test runs the compiled binary in a fresh temp directory with an
//! explicit environment and checks the exit status and the files left behind.

use serial_test::serial;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use typenode_changelog::{ChangelogInputs, Error, DESCRIPTION_VAR, ID_VAR, TITLE_VAR};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn run_in(dir: &Path, vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_build-changelog"));
    cmd.current_dir(dir)
        .env_remove(TITLE_VAR)
        .env_remove(DESCRIPTION_VAR)
        .env_remove(ID_VAR);
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run build-changelog")
}

fn dark_mode_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        (TITLE_VAR, "added: support for dark mode"),
        (DESCRIPTION_VAR, "Users can now enable dark mode."),
        (ID_VAR, "pr-123"),
    ]
}

// ─── Binary ────────────────────────────────────────────────────────────────

#[test]
fn test_writes_entry_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &dark_mode_vars());

    assert!(output.status.success());
    let content =
        std::fs::read_to_string(temp_dir.path().join("changelogs/pr-123.md")).unwrap();
    assert_eq!(
        content,
        "---\ntitle: support for dark mode\nhidden: false\ntype: added\n---\nUsers can now enable dark mode.\n"
    );
}

#[test]
fn test_second_run_leaves_entry_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("changelogs/pr-123.md");

    assert!(run_in(temp_dir.path(), &dark_mode_vars()).status.success());
    let first = std::fs::read_to_string(&path).unwrap();

    let output = run_in(
        temp_dir.path(),
        &[
            (TITLE_VAR, "fixed: a different title"),
            (DESCRIPTION_VAR, "Different body."),
            (ID_VAR, "pr-123"),
        ],
    );

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_unrecognized_prefix_exits_zero_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(
        temp_dir.path(),
        &[
            (TITLE_VAR, "chore: bump deps"),
            (DESCRIPTION_VAR, "Routine update."),
            (ID_VAR, "pr-7"),
        ],
    );

    assert!(output.status.success());
    assert!(!temp_dir.path().join("changelogs/pr-7.md").exists());
}

#[test]
fn test_missing_variable_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(
        temp_dir.path(),
        &[(TITLE_VAR, "added: x"), (DESCRIPTION_VAR, "y")],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CHANGELOG_ID"));
    assert!(!temp_dir.path().join("changelogs").exists());
}

#[test]
fn test_custom_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_build-changelog"));
    cmd.current_dir(temp_dir.path()).args(["--dir", "docs/changes"]);
    for (key, value) in dark_mode_vars() {
        cmd.env(key, value);
    }
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    assert!(temp_dir.path().join("docs/changes/pr-123.md").exists());
}

// ─── Process environment ───────────────────────────────────────────────────

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    std::env::set_var(TITLE_VAR, "improved: startup time");
    std::env::set_var(DESCRIPTION_VAR, "Faster.");
    std::env::set_var(ID_VAR, "pr-42");

    let inputs = ChangelogInputs::from_env().unwrap();

    std::env::remove_var(TITLE_VAR);
    std::env::remove_var(DESCRIPTION_VAR);
    std::env::remove_var(ID_VAR);

    assert_eq!(inputs.title, "improved: startup time");
    assert_eq!(inputs.description, "Faster.");
    assert_eq!(inputs.id, "pr-42");
}

#[test]
#[serial]
fn test_from_env_missing() {
    std::env::remove_var(TITLE_VAR);
    std::env::remove_var(DESCRIPTION_VAR);
    std::env::remove_var(ID_VAR);

    let err = ChangelogInputs::from_env().unwrap_err();
    assert!(matches!(err, Error::MissingInput { ref missing } if missing.len() == 3));
}
