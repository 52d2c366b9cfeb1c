//! Configuration file loading
//!
//! Options resolve with the following precedence (low to high):
//! 1. Built-in defaults ([`ScaffoldOptions::default`])
//! 2. `typenode.yaml` / `typenode.yml` in the project directory, or an
//!    explicit `--config` path
//! 3. CLI flags (applied by the caller)

use crate::error::{Error, Result};
use crate::types::{LintScripts, PackageManager, ScaffoldOptions};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["typenode.yaml", "typenode.yml"];

/// On-disk configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub package_manager: Option<PackageManager>,

    #[serde(default)]
    pub include_tests: Option<bool>,

    #[serde(default)]
    pub include_ci: Option<bool>,

    #[serde(default)]
    pub source_dir: Option<String>,

    #[serde(default)]
    pub lint: Option<LintScripts>,
}

impl ConfigFile {
    /// Parse YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        debug!("Loaded config from {}", path);
        Self::from_yaml(&content)
    }

    /// Find a config file in `project_dir`
    pub fn find(project_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| project_dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load `path` if given, otherwise whatever [`ConfigFile::find`] finds,
    /// otherwise an empty config
    pub fn resolve(project_dir: &Utf8Path, path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::find(project_dir) {
                Some(found) => Self::load(&found),
                None => Ok(Self::default()),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(source_dir) = &self.source_dir {
            if source_dir.trim().is_empty() {
                return Err(Error::invalid_config("source-dir must not be empty"));
            }
            let path = Utf8Path::new(source_dir);
            let escapes = path
                .components()
                .any(|c| matches!(c, Utf8Component::ParentDir));
            if path.is_absolute() || escapes {
                return Err(Error::invalid_config(format!(
                    "source-dir must be a relative path inside the project: {}",
                    source_dir
                )));
            }
        }

        if let Some(lint) = &self.lint {
            if lint.check_script.is_empty() || lint.fix_script.is_empty() {
                return Err(Error::invalid_config("lint script names must not be empty"));
            }
            if lint.check_script == lint.fix_script {
                return Err(Error::invalid_config(
                    "lint check-script and fix-script must differ",
                ));
            }
        }

        Ok(())
    }

    /// Layer this file over the built-in defaults
    pub fn into_options(self) -> ScaffoldOptions {
        let defaults = ScaffoldOptions::default();
        ScaffoldOptions {
            package_manager: self.package_manager.unwrap_or(defaults.package_manager),
            include_tests: self.include_tests.unwrap_or(defaults.include_tests),
            include_ci: self.include_ci.unwrap_or(defaults.include_ci),
            lint: self.lint.unwrap_or(defaults.lint),
            source_dir: self.source_dir.unwrap_or(defaults.source_dir),
        }
    }
}
