//! TypeScript compiler configuration
//!
//! `tsc --init` is run first so the project gets the compiler's own starter
//! file, then the fixed project options below are written over it.

use crate::error::Result;
use crate::process::Invocation;
use crate::types::PackageManager;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Compiler config file name at the project root
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Project compiler options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub root_dir: String,
    pub out_dir: String,
    pub base_url: String,
    pub resolve_json_module: bool,
    pub source_map: bool,
    pub es_module_interop: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub strict: bool,
    pub strict_null_checks: bool,
    pub no_implicit_any: bool,
    pub no_implicit_returns: bool,
    pub no_unchecked_indexed_access: bool,
    pub skip_lib_check: bool,
}

impl CompilerOptions {
    /// Options for a project rooted at `source_dir`
    pub fn for_source_dir(source_dir: &str) -> Self {
        Self {
            target: "es2022".to_string(),
            module: "node16".to_string(),
            module_resolution: "node16".to_string(),
            root_dir: source_dir.to_string(),
            out_dir: "dist".to_string(),
            base_url: "./".to_string(),
            resolve_json_module: true,
            source_map: true,
            es_module_interop: true,
            force_consistent_casing_in_file_names: true,
            strict: true,
            strict_null_checks: true,
            no_implicit_any: true,
            no_implicit_returns: true,
            no_unchecked_indexed_access: true,
            skip_lib_check: true,
        }
    }

    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Command-line flags for `tsc --init` carrying the same options
    pub fn init_flags(&self) -> Result<Vec<String>> {
        let mut flags = vec!["--init".to_string()];
        for (key, value) in self.to_map()? {
            flags.push(format!("--{}", key));
            flags.push(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        }
        Ok(flags)
    }
}

/// Invocation generating the starter `tsconfig.json`
pub fn init_invocation(
    package_manager: PackageManager,
    options: &CompilerOptions,
) -> Result<Invocation> {
    let mut args = vec!["tsc".to_string()];
    args.extend(options.init_flags()?);
    Ok(Invocation::new(package_manager.exec_program(), args))
}

/// Write the project compiler options into `tsconfig.json`
///
/// A plain-JSON file keeps its other keys and gets `compilerOptions` merged
/// key by key. The commented output of `tsc --init` is not JSON and is
/// replaced.
pub async fn write_tsconfig(
    project_dir: &Utf8Path,
    options: &CompilerOptions,
) -> Result<Utf8PathBuf> {
    let path = project_dir.join(TSCONFIG_FILE);

    let mut root = match tokio::fs::read_to_string(&path).await {
        Ok(content) => match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(root)) => root,
            _ => {
                debug!("Replacing non-JSON {}", path);
                Map::new()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
        Err(e) => return Err(e.into()),
    };

    let ours = options.to_map()?;

    let compiler_options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Map::new()));
    match compiler_options {
        Value::Object(existing) => existing.extend(ours),
        other => *other = Value::Object(ours),
    }

    root.entry("include")
        .or_insert_with(|| Value::Array(vec![Value::String(options.root_dir.clone())]));

    let mut content = serde_json::to_string_pretty(&Value::Object(root))?;
    content.push('\n');
    tokio::fs::write(&path, content).await?;
    debug!("Wrote {}", path);

    Ok(path)
}
