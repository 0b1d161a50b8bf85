//! Error types for git operations

use thiserror::Error;

/// Failure of a git backend operation
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable could not be found on `PATH`.
    #[error("git command not found. Please install git and ensure it's in your PATH")]
    NotInstalled,

    /// The working directory is not inside a git working tree.
    #[error("not a git repository. Run gelete from within a git repository")]
    NotARepository,

    /// git ran but exited unsuccessfully.
    ///
    /// `output` is git's own diagnostic, kept verbatim so callers can match
    /// on it.
    #[error("failed to {action}: {output}")]
    Failed {
        /// What was being attempted, e.g. `delete branch 'topic'`
        action: String,
        /// Trimmed stderr/stdout of the git process
        output: String,
    },

    /// git could not be spawned for a reason other than a missing executable.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

impl GitError {
    pub(crate) fn failed(action: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Failed {
            action: action.into(),
            output: output.into(),
        }
    }
}

/// Result type alias for git operations.
pub type Result<T> = std::result::Result<T, GitError>;
