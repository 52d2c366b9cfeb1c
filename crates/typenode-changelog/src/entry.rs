//! Changelog entry parsing and rendering

use std::fmt;
use std::str::FromStr;

/// Recognized change types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Added,
    Fixed,
    Improved,
    Deprecated,
    Removed,
}

impl ChangeType {
    /// Get all change types
    pub fn all() -> [Self; 5] {
        [
            Self::Added,
            Self::Fixed,
            Self::Improved,
            Self::Deprecated,
            Self::Removed,
        ]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Fixed => "fixed",
            Self::Improved => "improved",
            Self::Deprecated => "deprecated",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = String;

    // Case-sensitive: "Added: ..." is not a changelog title.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown change type: {}", s))
    }
}

/// A classified changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub change_type: ChangeType,
    pub title: String,
    pub description: String,
}

impl ChangelogEntry {
    /// Classify a pull request title.
    ///
    /// The title is split at the first `": "`. Returns `None` when there is
    /// no separator or the prefix is not a [`ChangeType`].
    pub fn parse(title: &str, description: &str) -> Option<Self> {
        let (prefix, rest) = title.split_once(": ")?;
        let change_type = prefix.parse().ok()?;

        Some(Self {
            change_type,
            title: rest.to_string(),
            description: description.to_string(),
        })
    }

    /// Markdown document with a front-matter header
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {}\nhidden: false\ntype: {}\n---\n{}\n",
            self.title, self.change_type, self.description
        )
    }
}
