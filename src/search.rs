//! Pattern/author filtering and the per-file search pass.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::git::GitRepository;
use crate::models::{AttributionRecord, MatchResult};
use crate::porcelain::BlameParser;

/// Compiled search patterns.
///
/// Both patterns are substring searches (no implicit anchoring), with
/// independently configured case sensitivity. Compilation failure is the
/// one fatal configuration error; it is raised before any file is scanned.
pub struct Query {
    content: Regex,
    author: Option<Regex>,
}

impl Query {
    pub fn new(
        pattern: &str,
        ignore_case: bool,
        author: Option<&str>,
        author_ignore_case: bool,
    ) -> Result<Self> {
        let content = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let author = author
            .map(|a| {
                RegexBuilder::new(a)
                    .case_insensitive(author_ignore_case)
                    .build()
                    .map_err(|source| Error::AuthorPattern {
                        pattern: a.to_string(),
                        source,
                    })
            })
            .transpose()?;

        Ok(Self { content, author })
    }

    /// Whether a record's content matches, and its author too when an
    /// author pattern was given. Pure predicate; no state across calls.
    pub fn matches(&self, record: &AttributionRecord) -> bool {
        self.content.is_match(&record.content)
            && self
                .author
                .as_ref()
                .map_or(true, |a| a.is_match(&record.author))
    }
}

/// Scan one file: retrieve its blame stream, parse it, and keep the
/// matching lines. Any failure here concerns this file alone; the caller
/// reports it and moves on.
pub fn search_file(repo: &GitRepository, path: &str, query: &Query) -> Result<Vec<MatchResult>> {
    let raw = repo.blame_porcelain(path)?;

    let mut matches = Vec::new();
    for record in BlameParser::new(&raw) {
        let record = record?;
        if query.matches(&record) {
            matches.push(MatchResult {
                file_path: path.to_string(),
                line_number: record.line_number,
                author: record.author,
                content: record.content,
            });
        }
    }

    tracing::debug!(path, matches = matches.len(), "scanned file");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, content: &str) -> AttributionRecord {
        AttributionRecord {
            commit_id: "c1".to_string(),
            author: author.to_string(),
            line_number: 1,
            content: content.to_string(),
        }
    }

    #[test]
    fn content_match_is_substring_not_anchored() {
        let q = Query::new("ODO", false, None, false).unwrap();
        assert!(q.matches(&record("Alice", "TODO: fix")));
        assert!(!q.matches(&record("Alice", "done")));
    }

    #[test]
    fn author_filter_requires_both_to_match() {
        let q = Query::new(".*", false, Some("^Bob$"), false).unwrap();
        assert!(q.matches(&record("Bob", "anything")));
        assert!(!q.matches(&record("Alice", "anything")));
        assert!(!q.matches(&record("Bobby", "anything")));
    }

    #[test]
    fn case_toggles_are_independent() {
        // Content case-insensitive, author still case-sensitive.
        let q = Query::new("todo", true, Some("alice"), false).unwrap();
        assert!(q.matches(&record("alice", "TODO")));
        assert!(!q.matches(&record("Alice", "TODO")));

        // Author case-insensitive, content still case-sensitive.
        let q = Query::new("todo", false, Some("alice"), true).unwrap();
        assert!(q.matches(&record("Alice", "todo")));
        assert!(!q.matches(&record("Alice", "TODO")));
    }

    #[test]
    fn no_author_pattern_matches_any_author() {
        let q = Query::new("x", false, None, false).unwrap();
        assert!(q.matches(&record("Anyone", "x marks the spot")));
    }

    #[test]
    fn invalid_patterns_are_config_errors() {
        assert!(matches!(
            Query::new("(unclosed", false, None, false),
            Err(Error::Pattern { .. })
        ));
        assert!(matches!(
            Query::new(".*", false, Some("(unclosed"), false),
            Err(Error::AuthorPattern { .. })
        ));
    }

    #[test]
    fn filtering_is_idempotent_over_the_same_records() {
        let q = Query::new("fn", false, Some("Alice"), false).unwrap();
        let recs = vec![
            record("Alice", "fn main() {"),
            record("Bob", "fn helper() {"),
            record("Alice", "let x = 1;"),
        ];
        let first: Vec<bool> = recs.iter().map(|r| q.matches(r)).collect();
        let second: Vec<bool> = recs.iter().map(|r| q.matches(r)).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![true, false, false]);
    }
}
