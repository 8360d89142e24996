//! Repository discovery and tracked-file listing.
//!
//! Wraps `git2::Repository` and keeps the canonical work-tree root, which
//! is the base for every path the rest of the pipeline sees: tracked-file
//! listings, blame invocations, and printed match paths are all expressed
//! relative to it.

use git2::Repository;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub struct GitRepository {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepository {
    /// Locate the repository containing `path`, searching parent
    /// directories the way git itself does.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("bare repository has no work tree"))?
            .canonicalize()?;
        Ok(Self { repo, workdir })
    }

    /// Canonical work-tree root.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Re-express a path from the invocation directory relative to the
    /// work-tree root. `None` if the path does not exist or lies outside
    /// the work tree.
    pub fn rel_to_root(&self, path: &Path) -> Option<String> {
        let abs = path.canonicalize().ok()?;
        let rel = abs.strip_prefix(&self.workdir).ok()?;
        Some(rel.to_string_lossy().into_owned())
    }

    /// List tracked files, optionally restricted to a directory.
    ///
    /// Paths come from the index, so they are root-relative and in index
    /// order (sorted by path), matching what `git ls-files` would print
    /// from the root. `scope` is a root-relative directory; empty or `.`
    /// means the whole tree.
    pub fn tracked_files(&self, scope: Option<&str>) -> Result<Vec<String>> {
        let index = self.repo.index()?;
        let scope = scope.map(|s| s.trim_end_matches('/')).filter(|s| !s.is_empty() && *s != ".");

        let mut files = Vec::new();
        for entry in index.iter() {
            let path = String::from_utf8_lossy(&entry.path).into_owned();
            if let Some(dir) = scope {
                let in_scope = path
                    .strip_prefix(dir)
                    .is_some_and(|rest| rest.starts_with('/'));
                if !in_scope {
                    continue;
                }
            }
            files.push(path);
        }

        tracing::debug!(
            count = files.len(),
            scope = scope.unwrap_or("(root)"),
            "listed tracked files"
        );
        Ok(files)
    }
}
