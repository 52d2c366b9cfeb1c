//! Writing changelog entries to disk

use crate::entry::ChangelogEntry;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{ErrorKind, Write};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Environment variable holding the pull request title
pub const TITLE_VAR: &str = "CHANGELOG_TITLE";

/// Environment variable holding the pull request description
pub const DESCRIPTION_VAR: &str = "CHANGELOG_DESCRIPTION";

/// Environment variable holding the entry id
pub const ID_VAR: &str = "CHANGELOG_ID";

/// Default output directory, relative to the working directory
pub const DEFAULT_DIR: &str = "changelogs";

/// The three values an entry is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogInputs {
    pub title: String,
    pub description: String,
    pub id: String,
}

impl ChangelogInputs {
    /// Build inputs from a variable lookup.
    ///
    /// Unset and empty values both count as missing; every missing name is
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let title = get(TITLE_VAR);
        let description = get(DESCRIPTION_VAR);
        let id = get(ID_VAR);

        match (title, description, id) {
            (Some(title), Some(description), Some(id)) => Ok(Self {
                title,
                description,
                id,
            }),
            (title, description, id) => {
                let missing = [
                    (TITLE_VAR, title.is_none()),
                    (DESCRIPTION_VAR, description.is_none()),
                    (ID_VAR, id.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name);
                Err(Error::missing_input(missing))
            }
        }
    }

    /// Build inputs from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// What a write attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new entry was written
    Written(Utf8PathBuf),
    /// An entry for this id already exists and was left alone
    AlreadyExists(Utf8PathBuf),
    /// The title has no recognized type prefix
    Unrecognized,
}

/// Writes entries into a changelog directory
#[derive(Debug, Clone)]
pub struct ChangelogWriter {
    dir: Utf8PathBuf,
}

impl ChangelogWriter {
    /// Create a writer for `dir`
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Path the entry for `id` is written to
    pub fn entry_path(&self, id: &str) -> Utf8PathBuf {
        self.dir.join(format!("{}.md", id))
    }

    /// Classify and write one entry; existing entries are never modified
    pub fn write(&self, inputs: &ChangelogInputs) -> Result<WriteOutcome> {
        let Some(entry) = ChangelogEntry::parse(&inputs.title, &inputs.description) else {
            info!("Changelog title doesn't start with a valid changelog type. Skipping.");
            return Ok(WriteOutcome::Unrecognized);
        };

        validate_id(&inputs.id)?;
        let path = self.entry_path(&inputs.id);

        std::fs::create_dir_all(&self.dir)?;

        let rendered = entry.render();
        if !stage_and_persist(&self.dir, &path, |file| file.write_all(rendered.as_bytes()))? {
            info!("Changelog for this PR already exists at {}. Skipping.", path);
            return Ok(WriteOutcome::AlreadyExists(path));
        }
        debug!("Wrote {} entry to {}", entry.change_type, path);

        Ok(WriteOutcome::Written(path))
    }
}

impl Default for ChangelogWriter {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

/// Write a temp file in `dir`, then move it to `path` unless `path` exists.
///
/// Returns `false` when `path` already existed. A failed write leaves
/// nothing behind.
fn stage_and_persist<F>(dir: &Utf8Path, path: &Utf8Path, write: F) -> Result<bool>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let mut staged = NamedTempFile::new_in(dir)?;
    write(staged.as_file_mut())?;
    staged.as_file().sync_all()?;

    match staged.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error.into()),
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id == "." || id == ".." || id.contains('/') || id.contains('\\') {
        return Err(Error::invalid_id(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn inputs(title: &str, id: &str) -> ChangelogInputs {
        ChangelogInputs {
            title: title.to_string(),
            description: "Users can now enable dark mode.".to_string(),
            id: id.to_string(),
        }
    }

    fn temp_writer() -> (TempDir, ChangelogWriter) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().join("changelogs")).unwrap();
        (temp_dir, ChangelogWriter::new(dir))
    }

    #[test]
    fn test_from_lookup_all_present() {
        let inputs = ChangelogInputs::from_lookup(lookup(&[
            (TITLE_VAR, "added: x"),
            (DESCRIPTION_VAR, "y"),
            (ID_VAR, "pr-1"),
        ]))
        .unwrap();
        assert_eq!(inputs.title, "added: x");
        assert_eq!(inputs.id, "pr-1");
    }

    #[test]
    fn test_from_lookup_reports_every_missing_name() {
        let err = ChangelogInputs::from_lookup(lookup(&[(DESCRIPTION_VAR, "y"), (ID_VAR, "")]))
            .unwrap_err();
        match err {
            Error::MissingInput { missing } => {
                assert_eq!(missing, vec![TITLE_VAR, ID_VAR]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_new_entry() {
        let (_temp, writer) = temp_writer();

        let outcome = writer.write(&inputs("added: support for dark mode", "pr-123")).unwrap();

        let path = writer.entry_path("pr-123");
        assert_eq!(outcome, WriteOutcome::Written(path.clone()));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "---\ntitle: support for dark mode\nhidden: false\ntype: added\n---\nUsers can now enable dark mode.\n"
        );
    }

    #[test]
    fn test_existing_entry_is_not_overwritten() {
        let (_temp, writer) = temp_writer();
        std::fs::create_dir_all(writer.dir()).unwrap();
        let path = writer.entry_path("pr-123");
        std::fs::write(&path, "hand edited").unwrap();

        let outcome = writer.write(&inputs("fixed: something else", "pr-123")).unwrap();

        assert_eq!(outcome, WriteOutcome::AlreadyExists(path.clone()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hand edited");
    }

    #[test]
    fn test_failed_write_leaves_no_entry() {
        let (_temp, writer) = temp_writer();
        std::fs::create_dir_all(writer.dir()).unwrap();
        let path = writer.entry_path("pr-5");

        let err = stage_and_persist(writer.dir(), &path, |file| {
            file.write_all(b"---\ntitle: trunc")?;
            Err(std::io::Error::other("disk full"))
        })
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(writer.dir()).unwrap().count(), 0);

        // A later run still writes the entry
        let outcome = writer.write(&inputs("added: retry", "pr-5")).unwrap();
        assert_eq!(outcome, WriteOutcome::Written(path.clone()));
        assert!(std::fs::read_to_string(path).unwrap().contains("title: retry"));
    }

    #[test]
    fn test_write_leaves_only_the_entry() {
        let (_temp, writer) = temp_writer();

        writer.write(&inputs("fixed: crash", "pr-6")).unwrap();

        let names: Vec<String> = std::fs::read_dir(writer.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["pr-6.md"]);
    }

    #[test]
    fn test_unrecognized_prefix_writes_nothing() {
        let (_temp, writer) = temp_writer();

        let outcome = writer.write(&inputs("chore: bump deps", "pr-9")).unwrap();

        assert_eq!(outcome, WriteOutcome::Unrecognized);
        assert!(!writer.dir().exists());
    }

    #[test]
    fn test_path_like_id_rejected() {
        let (_temp, writer) = temp_writer();

        let err = writer.write(&inputs("added: x", "../escape")).unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));

        let err = writer.write(&inputs("added: x", "..")).unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
    }
}
