//! Streaming parser for `git blame --porcelain` output.
//!
//! The stream is a sequence of blocks, one per line of the file's current
//! content:
//!
//! ```text
//! <commit-id> <original-line> <final-line> [<group-size>]
//! <key> [<value>]          (metadata; first appearance of the commit only)
//! ...
//! \t<line content>
//! ```
//!
//! Metadata for a commit appears once, on the commit's first block; later
//! blocks carry the bare header and are resolved through the
//! [`MetadataCache`]. A metadata-free header for a commit the stream never
//! introduced is a format violation and fails the parse. Streams that
//! repeat metadata on every block (`--line-porcelain` shape) also parse;
//! repeated metadata refreshes the cache entry.

mod cache;

pub use cache::MetadataCache;

use std::str::Lines;

use thiserror::Error;

use crate::models::{AttributionRecord, CommitMetadata};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: malformed block header '{text}'")]
    MalformedHeader { line: usize, text: String },

    #[error("line {line}: commit {commit} referenced before its metadata")]
    UnknownCommit { line: usize, commit: String },

    #[error("line {line}: metadata for commit {commit} has no author")]
    MissingAuthor { line: usize, commit: String },

    #[error("unexpected end of stream after line {line}")]
    Truncated { line: usize },
}

/// Iterator over the attribution records of one file's blame stream.
///
/// Yields one record per content line, in file order. The sequence is
/// finite and fused: the first `Err` is also the last item, and nothing
/// past the failure point is emitted.
pub struct BlameParser<'a> {
    lines: Lines<'a>,
    cache: MetadataCache,
    /// 1-based number of the last line taken from the stream
    pos: usize,
    done: bool,
}

impl<'a> BlameParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            cache: MetadataCache::new(),
            pos: 0,
            done: false,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.pos += 1;
        Some(line)
    }

    /// Header fields we use: the commit id and the final (current) line
    /// number. The original line number and optional group size are
    /// validated and dropped; grouping never substitutes for per-block
    /// headers.
    fn parse_header(header: &str) -> Option<(&str, u32)> {
        let mut fields = header.split_whitespace();
        let commit_id = fields.next()?;
        let _original: u32 = fields.next()?.parse().ok()?;
        let final_line: u32 = fields.next()?.parse().ok()?;
        if let Some(group_size) = fields.next() {
            group_size.parse::<u32>().ok()?;
        }
        if fields.next().is_some() {
            return None;
        }
        Some((commit_id, final_line))
    }

    fn parse_block(&mut self, header: &'a str) -> Result<AttributionRecord, ParseError> {
        let header_pos = self.pos;
        let Some((commit_id, line_number)) = Self::parse_header(header) else {
            return Err(ParseError::MalformedHeader {
                line: header_pos,
                text: header.to_string(),
            });
        };

        // Everything up to the tab-prefixed content line is metadata.
        // Values are optional (`boundary` is a bare key).
        let mut author: Option<&str> = None;
        let mut saw_metadata = false;
        let content = loop {
            let Some(line) = self.next_line() else {
                return Err(ParseError::Truncated { line: self.pos });
            };
            if let Some(rest) = line.strip_prefix('\t') {
                break rest;
            }
            saw_metadata = true;
            if let Some(value) = line.strip_prefix("author ") {
                author = Some(value);
            }
        };

        if saw_metadata {
            match author {
                Some(name) => self.cache.record(
                    commit_id,
                    CommitMetadata {
                        author: name.to_string(),
                    },
                ),
                // Partial metadata (filename, boundary, ...) for a commit
                // the stream already introduced is fine; for a new commit
                // the record cannot be attributed.
                None if self.cache.resolve(commit_id).is_none() => {
                    return Err(ParseError::MissingAuthor {
                        line: header_pos,
                        commit: commit_id.to_string(),
                    });
                }
                None => {}
            }
        }

        let Some(meta) = self.cache.resolve(commit_id) else {
            return Err(ParseError::UnknownCommit {
                line: header_pos,
                commit: commit_id.to_string(),
            });
        };

        Ok(AttributionRecord {
            commit_id: commit_id.to_string(),
            author: meta.author.clone(),
            line_number,
            content: content.to_string(),
        })
    }
}

impl Iterator for BlameParser<'_> {
    type Item = Result<AttributionRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let header = loop {
            match self.next_line() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(line) if line.is_empty() => continue,
                Some(line) => break line,
            }
        };

        match self.parse_block(header) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Result<AttributionRecord, ParseError>> {
        BlameParser::new(input).collect()
    }

    fn records(input: &str) -> Vec<AttributionRecord> {
        collect(input)
            .into_iter()
            .map(|r| r.expect("stream should parse"))
            .collect()
    }

    #[test]
    fn parses_compressed_stream_with_one_record_per_line() {
        let input = "\
c1 1 1 2
author Alice
author-mail <alice@example.com>
author-time 1700000000
summary add file
filename foo.rs
\tfn main() {
c1 2 2
\t    work();
c2 3 3 1
author Bob
summary tweak
filename foo.rs
\t}
";
        let recs = records(input);
        assert_eq!(recs.len(), 3);
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.line_number as usize, i + 1, "ascending, gap-free");
        }
        assert_eq!(recs[0].author, "Alice");
        assert_eq!(recs[1].author, "Alice");
        assert_eq!(recs[1].commit_id, "c1");
        assert_eq!(recs[2].author, "Bob");
        assert_eq!(recs[2].content, "}");
    }

    #[test]
    fn metadata_seen_once_resolves_anywhere_later_in_the_stream() {
        let input = "\
c1 1 1 1
author Alice
filename f
\tone
c2 2 2 1
author Bob
filename f
\ttwo
c1 3 3 1
filename f
\tthree
c1 4 4
\tfour
";
        let recs = records(input);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[2].author, "Alice");
        assert_eq!(recs[3].author, "Alice");
    }

    #[test]
    fn unknown_commit_fails_and_emits_nothing_past_the_failure() {
        let input = "\
c1 1 1 1
author Alice
filename f
\tone
deadbeef 2 2 1
\ttwo
c1 3 3
\tthree
";
        let items = collect(input);
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(
            items[1],
            Err(ParseError::UnknownCommit { ref commit, .. }) if commit == "deadbeef"
        ));
    }

    #[test]
    fn malformed_header_is_an_error() {
        let items = collect("c1 one 1\n\tcontent\n");
        assert!(matches!(items[0], Err(ParseError::MalformedHeader { .. })));

        let items = collect("c1 1\n\tcontent\n");
        assert!(matches!(items[0], Err(ParseError::MalformedHeader { .. })));
    }

    #[test]
    fn truncated_stream_is_an_error() {
        // Header with no content line following.
        let items = collect("c1 1 1 1\nauthor Alice\n");
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(ParseError::Truncated { .. })));
    }

    #[test]
    fn first_metadata_block_without_author_is_an_error() {
        let items = collect("c1 1 1 1\nsummary no author here\n\tcontent\n");
        assert!(matches!(
            items[0],
            Err(ParseError::MissingAuthor { ref commit, .. }) if commit == "c1"
        ));
    }

    #[test]
    fn bare_metadata_keys_and_empty_content_are_accepted() {
        let input = "\
c1 1 1 1
author Alice
boundary
filename f
\t
";
        let recs = records(input);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].content, "");
    }

    #[test]
    fn uncompressed_stream_repeating_metadata_parses_too() {
        let input = "\
c1 1 1 1
author Alice
filename f
\tone
c1 2 2 1
author Alice
filename f
\ttwo
";
        let recs = records(input);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].author, "Alice");
    }

    #[test]
    fn author_names_with_spaces_are_kept_whole() {
        let input = "c1 1 1 1\nauthor Alice B. Toklas\nfilename f\n\tx\n";
        assert_eq!(records(input)[0].author, "Alice B. Toklas");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(collect("").is_empty());
    }
}
