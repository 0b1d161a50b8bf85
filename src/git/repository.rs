//! Repository queries: validity, current branch and local branch list

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{GitError, Result, git_output, spawn};

/// Sentinel returned by [`Repository::current_branch`] in detached HEAD state
pub const DETACHED_HEAD: &str = "HEAD";

/// A git working directory and the executable used to query it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
    program: OsString,
}

impl Repository {
    /// Bind to `root` using the `git` found on `PATH`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_program(root, "git")
    }

    /// Bind to `root` using a specific git executable
    #[must_use]
    pub fn with_program(root: impl Into<PathBuf>, program: impl AsRef<OsStr>) -> Self {
        Self {
            root: root.into(),
            program: program.as_ref().to_os_string(),
        }
    }

    /// Directory every git command runs in
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name or path of the git executable
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Check that the directory is inside a git working tree
    ///
    /// # Errors
    ///
    /// - [`GitError::NotInstalled`] if git cannot be found
    /// - [`GitError::NotARepository`] outside a working tree
    /// - [`GitError::Failed`] for any other git failure
    pub fn validate(&self) -> Result<()> {
        let output = spawn(self, ["rev-parse", "--is-inside-work-tree"])?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        if output.status.success() {
            // Inside `.git` itself git answers "false"
            if stdout.trim() == "true" {
                return Ok(());
            }
            return Err(GitError::NotARepository);
        }

        let diagnostic = super::diagnostic(&output);
        if diagnostic.contains("not a git repository") {
            return Err(GitError::NotARepository);
        }
        Err(GitError::failed("inspect repository", diagnostic))
    }

    /// Name of the checked-out branch, or `"HEAD"` when detached
    ///
    /// # Errors
    ///
    /// Returns an error if git fails
    pub fn current_branch(&self) -> Result<String> {
        let name = git_output(self, ["branch", "--show-current"], "get current branch")?;
        if name.is_empty() {
            return Ok(DETACHED_HEAD.to_string());
        }
        Ok(name)
    }

    /// All local branches except the current one, sorted by byte order
    ///
    /// # Errors
    ///
    /// Returns an error if the current branch or the branch list cannot be
    /// read
    pub fn list_branches(&self) -> Result<Vec<String>> {
        let current = self.current_branch()?;
        let output = git_output(
            self,
            ["for-each-ref", "--format=%(refname:lstrip=2)", "refs/heads"],
            "list branches",
        )?;

        let branches = filter_branches(&output, &current);
        debug!(count = branches.len(), current = %current, "Listed branches");
        Ok(branches)
    }
}

/// Parse one-branch-per-line output, dropping blanks and `current`
fn filter_branches(output: &str, current: &str) -> Vec<String> {
    let mut branches: Vec<String> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != current)
        .map(String::from)
        .collect();
    branches.sort_unstable();
    branches.dedup();
    branches
}
