//! Raw blame retrieval.
//!
//! Blame data is fetched by running the `git` binary rather than through
//! libgit2: the pipeline's job is to parse the porcelain text format, so it
//! consumes exactly what `git blame --porcelain` emits. Parsing lives in
//! [`crate::porcelain`].

use std::process::Command;

use crate::error::{Error, Result};
use crate::git::repository::GitRepository;

impl GitRepository {
    /// Run `git blame --porcelain` on one tracked file and return the raw
    /// output. `path` is relative to the work-tree root; the command runs
    /// with the root as its working directory.
    ///
    /// A failed invocation (git missing, file untracked, etc.) is an error
    /// for this file only; callers skip the file and continue.
    pub fn blame_porcelain(&self, path: &str) -> Result<String> {
        tracing::debug!(path, "running git blame");

        let output = Command::new("git")
            .arg("blame")
            .arg("--porcelain")
            .arg("--")
            .arg(path)
            .current_dir(self.workdir())
            .output()
            .map_err(|e| Error::BlameFailed {
                detail: format!("could not run git: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::BlameFailed {
                detail: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
