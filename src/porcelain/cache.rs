//! Commit metadata cache.

use std::collections::HashMap;

use crate::models::CommitMetadata;

/// Commit-id → metadata map scoped to one file's blame parse.
///
/// The porcelain format sends a commit's metadata once, on its first
/// appearance in the stream; every later block for that commit carries only
/// the header. The cache makes the format's invariant explicit: metadata
/// must precede or coincide with a commit's first metadata-free reference,
/// and a lookup miss is a format violation, never a default.
#[derive(Debug, Default)]
pub struct MetadataCache {
    commits: HashMap<String, CommitMetadata>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh the entry for `commit_id`.
    pub fn record(&mut self, commit_id: &str, meta: CommitMetadata) {
        self.commits.insert(commit_id.to_string(), meta);
    }

    /// Metadata for a previously announced commit.
    pub fn resolve(&self, commit_id: &str) -> Option<&CommitMetadata> {
        self.commits.get(commit_id)
    }
}
