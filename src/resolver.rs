//! File set resolution.
//!
//! Turns the CLI's path arguments into the root-relative list of files the
//! scan will visit. Arguments that cannot be scanned are warnings, not
//! errors; only a failure to list tracked files at all aborts the run.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::git::GitRepository;

/// Resolve CLI path arguments into the list of files to scan.
///
/// No arguments means every tracked file. An existing file argument is
/// taken as is, a directory argument expands to the tracked files under
/// it, and anything else is reported to stderr and skipped. The result is
/// deduplicated and keeps first-seen order across argument positions.
pub fn resolve_targets(repo: &GitRepository, paths: &[String]) -> Result<Vec<String>> {
    if paths.is_empty() {
        return Ok(dedupe(repo.tracked_files(None)?));
    }

    let mut targets = Vec::new();
    for arg in paths {
        let path = Path::new(arg);
        if path.is_file() {
            match repo.rel_to_root(path) {
                Some(rel) => targets.push(rel),
                None => warn_skipped(arg, "outside the repository work tree"),
            }
        } else if path.is_dir() {
            match repo.rel_to_root(path) {
                Some(rel) => targets.extend(repo.tracked_files(Some(&rel))?),
                None => warn_skipped(arg, "outside the repository work tree"),
            }
        } else {
            warn_skipped(arg, "not a file or directory");
        }
    }
    Ok(dedupe(targets))
}

fn warn_skipped(arg: &str, reason: &str) {
    tracing::debug!(path = arg, reason, "skipping path argument");
    eprintln!("blamegrep: warning: {arg}: {reason}");
}

fn dedupe(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_seen_order() {
        let paths = vec![
            "b.rs".to_string(),
            "a.rs".to_string(),
            "b.rs".to_string(),
            "c.rs".to_string(),
            "a.rs".to_string(),
        ];
        assert_eq!(dedupe(paths), vec!["b.rs", "a.rs", "c.rs"]);
    }
}
