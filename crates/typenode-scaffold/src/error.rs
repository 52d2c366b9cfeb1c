//! Error types for typenode-scaffold

use thiserror::Error;

/// Result type alias using typenode-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// External command exited unsuccessfully
    #[error("Command failed: {command} (exit code {})", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// External command could not be spawned
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Manifest is missing
    #[error("Manifest not found at: {path}. Did the package manager init step run?")]
    ManifestNotFound { path: String },

    /// Manifest has an unexpected shape
    #[error("Invalid manifest at {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Source directory already exists
    #[error("Source directory already exists at: {path}")]
    SourceDirExists { path: String },

    /// Bundled template missing from the binary
    #[error("Bundled template not found: {template}")]
    TemplateNotFound { template: String },

    /// Config file not found
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl Error {
    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a source dir exists error
    pub fn source_dir_exists(path: impl Into<String>) -> Self {
        Self::SourceDirExists { path: path.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Process exit code the CLI should report for this error.
    ///
    /// A failed child reports its own code; a child killed by a signal maps
    /// to 1, an unspawnable program to 127.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => code.filter(|c| *c != 0).unwrap_or(1),
            Self::CommandNotFound { .. } => 127,
            _ => 1,
        }
    }
}
