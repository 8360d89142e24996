//! Search results.

/// A line that matched the content pattern and, when given, the author
/// pattern. Produced by the filter, consumed by the formatter in the same
/// pass; nothing is retained after printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Path of the file containing the match, relative to the work-tree root
    pub file_path: String,
    /// Line number in the file's current revision (1-based)
    pub line_number: u32,
    /// Author who last modified the line
    pub author: String,
    /// The matching line's content
    pub content: String,
}
