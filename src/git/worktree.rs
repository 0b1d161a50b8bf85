//! Git worktree management

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Repository, Result, git_output, git_run};

const HEADS_PREFIX: &str = "refs/heads/";

/// A registered worktree, as reported by `git worktree list --porcelain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    /// Canonical path of the worktree directory (literal path if it cannot
    /// be resolved)
    pub path: PathBuf,
    /// Checked-out branch, `None` for detached or bare worktrees
    pub branch: Option<String>,
    /// Whether the worktree is locked
    pub locked: bool,
}

impl Worktree {
    fn at(path: &str) -> Self {
        Self {
            path: canonical_or_literal(path),
            branch: None,
            locked: false,
        }
    }
}

/// Resolve symlinks, keeping the path as written when that fails
fn canonical_or_literal(path: &str) -> PathBuf {
    let literal = PathBuf::from(path);
    literal.canonicalize().unwrap_or(literal)
}

/// Parse porcelain worktree output into one entry per block
///
/// Blocks are `key value` lines separated by blank lines. A block that is
/// not followed by a blank line is still returned.
#[must_use]
pub fn parse_porcelain(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in output.lines().map(str::trim) {
        if line.is_empty() {
            worktrees.extend(current.take());
            continue;
        }

        let (key, value) = line.split_once(' ').unwrap_or((line, ""));

        if key == "worktree" {
            worktrees.extend(current.take());
            current = Some(Worktree::at(value));
            continue;
        }

        let Some(worktree) = current.as_mut() else {
            continue;
        };

        match key {
            "branch" => {
                let branch = value.strip_prefix(HEADS_PREFIX).unwrap_or(value);
                worktree.branch = Some(branch.to_string());
            }
            "locked" => worktree.locked = true,
            _ => {}
        }
    }

    worktrees.extend(current);
    worktrees
}

/// Manager for git worktree operations
#[derive(Debug, Clone, Copy)]
pub struct Manager<'a> {
    repo: &'a Repository,
}

impl<'a> Manager<'a> {
    /// Create a new worktree manager for the given repository
    #[must_use]
    pub const fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    /// List every worktree, including the main working directory
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot list worktrees
    pub fn list(&self) -> Result<Vec<Worktree>> {
        let output = git_output(
            self.repo,
            ["worktree", "list", "--porcelain"],
            "list worktrees",
        )?;
        let worktrees = parse_porcelain(&output);
        debug!(count = worktrees.len(), "Listed worktrees");
        Ok(worktrees)
    }

    /// Remove a worktree
    ///
    /// # Errors
    ///
    /// Returns git's diagnostic if the worktree is locked, dirty or unknown
    pub fn remove(&self, path: &Path) -> Result<()> {
        let action = format!("remove worktree '{}'", path.display());
        git_run(
            self.repo,
            [OsStr::new("worktree"), OsStr::new("remove"), path.as_os_str()],
            &action,
        )?;
        info!(path = %path.display(), "Worktree removed");
        Ok(())
    }

    /// Remove a worktree even if it is locked or has local changes
    ///
    /// git only overrides the lock when `--force` is given twice.
    ///
    /// # Errors
    ///
    /// Returns git's diagnostic if the path is not a registered worktree
    pub fn force_remove(&self, path: &Path) -> Result<()> {
        let action = format!("force remove worktree '{}'", path.display());
        git_run(
            self.repo,
            [
                OsStr::new("worktree"),
                OsStr::new("remove"),
                OsStr::new("--force"),
                OsStr::new("--force"),
                path.as_os_str(),
            ],
            &action,
        )?;
        info!(path = %path.display(), "Worktree force removed");
        Ok(())
    }

    /// The worktree that has `branch` checked out, if any
    ///
    /// # Errors
    ///
    /// Returns an error if worktrees cannot be listed
    pub fn for_branch(&self, branch: &str) -> Result<Option<Worktree>> {
        Ok(find_for_branch(&self.list()?, branch).cloned())
    }
}

/// Pick the worktree whose branch is `branch`
#[must_use]
pub fn find_for_branch<'w>(worktrees: &'w [Worktree], branch: &str) -> Option<&'w Worktree> {
    worktrees
        .iter()
        .find(|wt| wt.branch.as_deref() == Some(branch))
}
