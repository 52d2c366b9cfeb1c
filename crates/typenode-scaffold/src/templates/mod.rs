//! Bundled template files
//!
//! Embedded trees shipped inside the binary:
//! - `templates/lint/`: the eslint configuration copied to the project root
//! - `templates/ci/common/`: CI files shared by every package manager
//! - `templates/ci/{npm,yarn}/`: the build workflow for one package manager
//!
//! Files are copied verbatim, overwriting files with the same relative path.

use crate::error::{Error, Result};
use crate::types::PackageManager;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use tracing::debug;

/// Lint config file name, both in the bundle and in the project
pub const LINT_CONFIG_FILE: &str = ".eslintrc.json";

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/lint/"]
struct LintTemplates;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/ci/common/"]
struct CommonCiTemplates;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/ci/npm/"]
struct NpmCiTemplates;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/ci/yarn/"]
struct YarnCiTemplates;

/// Copy the bundled lint configuration into `project_dir`
pub async fn copy_lint_config(project_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let file = LintTemplates::get(LINT_CONFIG_FILE)
        .ok_or_else(|| Error::template_not_found(LINT_CONFIG_FILE))?;

    let target = project_dir.join(LINT_CONFIG_FILE);
    tokio::fs::write(&target, file.data.as_ref()).await?;
    debug!("Wrote {}", target);

    Ok(target)
}

fn ci_file(package_manager: PackageManager, relative: &str) -> Option<Cow<'static, [u8]>> {
    let specific = match package_manager {
        PackageManager::Npm => NpmCiTemplates::get(relative),
        PackageManager::Yarn => YarnCiTemplates::get(relative),
    };
    specific
        .or_else(|| CommonCiTemplates::get(relative))
        .map(|file| file.data)
}

/// Relative paths of every CI template for `package_manager`, sorted
pub fn ci_template_paths(package_manager: PackageManager) -> Vec<String> {
    let specific: Vec<Cow<'static, str>> = match package_manager {
        PackageManager::Npm => NpmCiTemplates::iter().collect(),
        PackageManager::Yarn => YarnCiTemplates::iter().collect(),
    };

    let mut paths: Vec<String> = CommonCiTemplates::iter()
        .chain(specific)
        .map(Cow::into_owned)
        .collect();
    paths.sort();
    paths.dedup();
    paths
}

/// Copy the CI tree for `package_manager` into `project_dir`, preserving structure
pub async fn copy_ci_templates(
    project_dir: &Utf8Path,
    package_manager: PackageManager,
) -> Result<Vec<Utf8PathBuf>> {
    let mut created = Vec::new();

    for relative in ci_template_paths(package_manager) {
        let data = ci_file(package_manager, &relative)
            .ok_or_else(|| Error::template_not_found(relative.as_str()))?;

        let target = project_dir.join(&relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, data.as_ref()).await?;
        debug!("Wrote {}", target);

        created.push(target);
    }

    Ok(created)
}
