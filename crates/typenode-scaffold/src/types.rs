//! Core types for project scaffolding

use serde::{Deserialize, Serialize};

/// Development dependencies for TypeScript support, installed in order
pub const TYPESCRIPT_DEPENDENCIES: &[&str] = &["typescript", "@types/node", "ts-node", "nodemon"];

/// Development dependencies for linting, installed in order
pub const LINT_DEPENDENCIES: &[&str] = &[
    "eslint",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
];

/// Test runner dependency
pub const TEST_DEPENDENCY: &str = "jest";

/// Package manager used to drive the scaffold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// npm (primary)
    #[default]
    Npm,
    /// Yarn (alternate)
    Yarn,
}

impl PackageManager {
    /// Get all supported package managers
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Yarn]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Executable invoked for manifest and dependency operations
    pub fn program(&self) -> &'static str {
        self.as_str()
    }

    /// Arguments for non-interactive manifest creation
    pub fn init_args(&self) -> Vec<String> {
        vec!["init".to_string(), "-y".to_string()]
    }

    /// Arguments installing a single development dependency
    pub fn install_dev_args(&self, dependency: &str) -> Vec<String> {
        match self {
            Self::Npm => vec!["install".into(), "-D".into(), dependency.into()],
            Self::Yarn => vec!["add".into(), dependency.into(), "--dev".into()],
        }
    }

    /// Executable used to run locally installed binaries such as `tsc`
    pub fn exec_program(&self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Yarn => "yarn",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|pm| pm.as_str() == s_lower)
            .ok_or_else(|| {
                format!(
                    "Unknown package manager: {}. Valid values: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|pm| pm.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Lint script naming and target path
///
/// Both observed initializer variants are expressible here: the script names
/// and the path handed to eslint are configuration, not constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LintScripts {
    /// Path eslint is pointed at
    pub target: String,
    /// Script name for checking
    pub check_script: String,
    /// Script name for auto-fixing
    pub fix_script: String,
}

impl Default for LintScripts {
    fn default() -> Self {
        Self {
            target: ".".to_string(),
            check_script: "lint".to_string(),
            fix_script: "lint:fix".to_string(),
        }
    }
}

impl LintScripts {
    /// Script entries to merge into the manifest
    pub fn scripts(&self) -> Vec<(String, String)> {
        vec![
            (
                self.check_script.clone(),
                format!("eslint {} --ext .ts", self.target),
            ),
            (
                self.fix_script.clone(),
                format!("eslint {} --ext .ts --fix", self.target),
            ),
        ]
    }
}

/// Options selecting which scaffold steps run and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Package manager driving installs
    pub package_manager: PackageManager,
    /// Install a test runner and add a `test` script
    pub include_tests: bool,
    /// Copy the bundled CI templates
    pub include_ci: bool,
    /// Lint script configuration
    pub lint: LintScripts,
    /// Source directory name, relative to the project root
    pub source_dir: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            include_tests: true,
            include_ci: false,
            lint: LintScripts::default(),
            source_dir: "src".to_string(),
        }
    }
}

impl ScaffoldOptions {
    /// Set the package manager
    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    /// Enable or disable test tooling
    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Enable or disable CI template copying
    pub fn with_ci(mut self, include_ci: bool) -> Self {
        self.include_ci = include_ci;
        self
    }

    /// Set lint scripts
    pub fn with_lint(mut self, lint: LintScripts) -> Self {
        self.lint = lint;
        self
    }
}
