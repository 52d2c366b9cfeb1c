//! `package.json` read-modify-write

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::debug;

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// A parsed package manifest
///
/// Key order of the original file is kept when written back.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: Utf8PathBuf,
    root: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from a project directory
    pub async fn load(project_dir: &Utf8Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::manifest_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        Self::parse(path, &content)
    }

    /// Parse manifest content that lives at `path`
    pub fn parse(path: Utf8PathBuf, content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(Error::invalid_manifest(
                path.as_str(),
                "root is not a JSON object",
            )),
        }
    }

    /// Path this manifest is written to
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Look up a script by name
    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get("scripts")
            .and_then(Value::as_object)
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// Shallow-merge script entries; later entries win on collision.
    ///
    /// A `null` `scripts` value is treated as empty.
    pub fn merge_scripts<I, K, V>(&mut self, scripts: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self
            .root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if entry.is_null() {
            *entry = Value::Object(Map::new());
        }

        let Value::Object(existing) = entry else {
            return Err(Error::invalid_manifest(
                self.path.as_str(),
                "\"scripts\" is not a JSON object",
            ));
        };

        for (name, command) in scripts {
            existing.insert(name.into(), Value::String(command.into()));
        }

        Ok(())
    }

    /// Serialize with 2-space indentation
    pub fn to_json_string(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        Ok(content)
    }

    /// Write the manifest back to disk
    pub async fn save(&self) -> Result<()> {
        tokio::fs::write(&self.path, self.to_json_string()?).await?;
        debug!("Wrote {}", self.path);
        Ok(())
    }
}

/// Read the manifest, merge `scripts`, and write it back
pub async fn update_scripts<I, K, V>(project_dir: &Utf8Path, scripts: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut manifest = Manifest::load(project_dir).await?;
    manifest.merge_scripts(scripts)?;
    manifest.save().await
}
