//! Application error types.
//!
//! Defines the `Error` enum for all failure conditions and a crate-wide
//! `Result` alias.
//!
//! Fatality is decided by where an error surfaces, not by its variant:
//! - `Pattern`, `AuthorPattern` — always fatal, the run aborts before any
//!   file is scanned.
//! - `Git` — fatal when raised while opening the repository or listing
//!   tracked files (nothing left to scan).
//! - `BlameFailed`, `Parse` — raised while scanning a single file; the scan
//!   loop reports them and moves on to the next file.

use thiserror::Error;

use crate::porcelain::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid author pattern '{pattern}': {source}")]
    AuthorPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("git blame failed: {detail}")]
    BlameFailed { detail: String },

    #[error("malformed blame output: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
