//! Working-copy port for local repository clones.

use std::path::{Path, PathBuf};

/// Manages local working copies of assignment repositories.
///
/// Only the wildcard target mode needs a working copy, to enumerate the
/// tracked files an assignment could have touched.
pub trait Workdir: Send + Sync {
    /// Ensures a local clone of `repo_url` exists and returns its path.
    ///
    /// An existing clone is reused as-is; no fetch or pull is performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone cannot be created.
    fn ensure_clone(&self, repo_url: &str)
        -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the paths of all tracked files in the working copy at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not a repository or the file
    /// list cannot be retrieved.
    fn tracked_files(
        &self,
        dir: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
