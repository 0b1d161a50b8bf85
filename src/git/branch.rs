//! Git branch deletion

use tracing::info;

use super::{Repository, Result, git_run};

/// Deletes local branches
///
/// Implemented by [`Manager`] against a real repository; the session state
/// machine only depends on this trait.
pub trait BranchMutator {
    /// Delete a branch only if it is merged
    ///
    /// # Errors
    ///
    /// Fails if the branch is unmerged, missing, checked out, or used by a
    /// worktree. The error text keeps git's diagnostic.
    fn delete(&self, name: &str) -> Result<()>;

    /// Delete a branch regardless of merge state
    ///
    /// # Errors
    ///
    /// Fails if the branch is missing, checked out, or used by a worktree.
    fn force_delete(&self, name: &str) -> Result<()>;
}

/// Manager for git branch operations
#[derive(Debug, Clone, Copy)]
pub struct Manager<'a> {
    repo: &'a Repository,
}

impl<'a> Manager<'a> {
    /// Create a new branch manager for the given repository
    #[must_use]
    pub const fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }
}

impl BranchMutator for Manager<'_> {
    fn delete(&self, name: &str) -> Result<()> {
        git_run(
            self.repo,
            ["branch", "-d", name],
            &format!("delete branch '{name}'"),
        )?;
        info!(branch = name, "Branch deleted");
        Ok(())
    }

    fn force_delete(&self, name: &str) -> Result<()> {
        git_run(
            self.repo,
            ["branch", "-D", name],
            &format!("force delete branch '{name}'"),
        )?;
        info!(branch = name, "Branch force deleted");
        Ok(())
    }
}
