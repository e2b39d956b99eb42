//! Working-copy adapter using the `git` CLI.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::assignment::sanitize_repo_name;
use crate::ports::Workdir;

/// Working-copy manager that shells out to the `git` CLI.
///
/// Clones land under a configured root directory, named after the
/// sanitized repository name.
pub struct GitWorkdir {
    root: PathBuf,
}

impl GitWorkdir {
    /// Creates a manager cloning under `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Workdir for GitWorkdir {
    fn ensure_clone(
        &self,
        repo_url: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let dir = self.root.join(sanitize_repo_name(repo_url));
        if dir.exists() {
            println!("Repository {} already exists.", dir.display());
            return Ok(dir);
        }
        let output = Command::new("git").arg("clone").arg(repo_url).arg(&dir).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git clone {repo_url} failed: {stderr}").into());
        }
        println!("Cloned repository {repo_url} into {}.", dir.display());
        Ok(dir)
    }

    fn tracked_files(
        &self,
        dir: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("git").arg("ls-files").current_dir(dir).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git ls-files failed in {}: {stderr}", dir.display()).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect())
    }
}
