//! Per-line blame attribution.
//!
//! An `AttributionRecord` ties one line of a file's current content to the
//! commit and author that last modified it. Records are produced by the
//! porcelain parser, one per content line, and are immutable once emitted.

/// Attribution for a single line of a file's working-tree content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionRecord {
    /// Identifier of the commit that last modified this line
    pub commit_id: String,
    /// Name of the author of that commit
    pub author: String,
    /// Line number in the file's current revision (1-based)
    pub line_number: u32,
    /// Line content, without the trailing newline
    pub content: String,
}

/// Metadata for one commit, discovered incrementally from a blame stream.
///
/// The porcelain format sends a commit's metadata only the first time the
/// commit appears; later blocks carry the commit id alone. The parser keeps
/// these entries in a [`MetadataCache`](crate::porcelain::MetadataCache) so
/// metadata-free blocks can be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMetadata {
    /// Author name from the `author` metadata line
    pub author: String,
}
