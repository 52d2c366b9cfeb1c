//! Error types for typenode-changelog

use thiserror::Error;

/// Result type alias using typenode-changelog's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Changelog error types
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required inputs are unset or empty
    #[error("Changelog title, description or id not set (missing: {})", .missing.join(", "))]
    MissingInput { missing: Vec<String> },

    /// Id cannot be used as a file name
    #[error("Invalid changelog id: {id:?}. Ids must be a plain file name")]
    InvalidId { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing input error
    pub fn missing_input<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingInput {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid id error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }
}
