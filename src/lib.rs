//! Line-level, attribution-aware search over a git work tree.
//!
//! Given a content pattern and an optional author pattern, blamegrep scans
//! tracked files and reports every line whose current content matches the
//! pattern and whose last-modifying commit's author matches the author
//! pattern. Blame data is retrieved from the `git` binary in porcelain
//! form and re-parsed into per-line attribution records.
//!
//! Pipeline: [`resolver`] picks the files, [`git`] retrieves each file's
//! raw blame stream, [`porcelain`] turns it into
//! [`AttributionRecord`](models::AttributionRecord)s, [`search`] keeps the
//! matching ones, and [`output`] prints them.

pub mod error;
pub mod git;
pub mod models;
pub mod output;
pub mod porcelain;
pub mod resolver;
pub mod search;

pub use error::{Error, Result};
pub use git::GitRepository;
pub use models::{AttributionRecord, CommitMetadata, MatchResult};
pub use output::{OutputOptions, Printer};
pub use porcelain::{BlameParser, MetadataCache, ParseError};
pub use resolver::resolve_targets;
pub use search::{Query, search_file};
