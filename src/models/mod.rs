//! Data types flowing through the search pipeline.
//!
//! - `attribution`: AttributionRecord, CommitMetadata — per-line blame data
//! - `search`: MatchResult for lines that passed the pattern/author filter

pub mod attribution;
pub mod search;

pub use attribution::*;
pub use search::*;
