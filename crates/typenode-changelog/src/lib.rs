//! # typenode-changelog
//!
//! Turns pull request metadata into a changelog entry file.
//!
//! A title such as `added: support for dark mode` is classified by its type
//! prefix and written to `changelogs/<id>.md` with a small front-matter
//! header. Titles without a recognized prefix are skipped, and an entry that
//! already exists is never rewritten.
//!
//! ```no_run
//! use typenode_changelog::{ChangelogInputs, ChangelogWriter, WriteOutcome};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = ChangelogInputs::from_env()?;
//! match ChangelogWriter::default().write(&inputs)? {
//!     WriteOutcome::Written(path) => println!("wrote {}", path),
//!     WriteOutcome::AlreadyExists(path) => println!("kept {}", path),
//!     WriteOutcome::Unrecognized => println!("not a changelog entry"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod error;
pub mod writer;

pub use entry::{ChangeType, ChangelogEntry};
pub use error::{Error, Result};
pub use writer::{
    ChangelogInputs, ChangelogWriter, WriteOutcome, DEFAULT_DIR, DESCRIPTION_VAR, ID_VAR,
    TITLE_VAR,
};
