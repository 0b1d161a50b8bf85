//! Git operations module
//!
//! Every operation shells out to the `git` executable and parses its text
//! output. Commands run with the `C` locale so diagnostics have stable
//! wording.

mod branch;
mod error;
mod repository;
mod worktree;

pub use branch::{BranchMutator, Manager as BranchManager};
pub use error::{GitError, Result};
pub use repository::{DETACHED_HEAD, Repository};
pub use worktree::{Manager as WorktreeManager, Worktree, find_for_branch, parse_porcelain};

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::{Command, Output};
use tracing::debug;

/// Build a `git` command bound to the repository root
pub(crate) fn git_command(repo: &Repository) -> Command {
    let mut cmd = Command::new(repo.program());
    cmd.current_dir(repo.root()).env("LC_ALL", "C");
    cmd
}

/// Spawn git and wait for it, mapping a missing executable to `NotInstalled`
fn spawn<I, S>(repo: &Repository, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = git_command(repo);
    cmd.args(args);
    debug!(command = ?cmd, "Running git");

    cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            GitError::NotInstalled
        } else {
            GitError::Io(e)
        }
    })
}

/// Combined, trimmed diagnostic text of a finished git process
fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    match (stderr.trim(), stdout.trim()) {
        ("", out) => out.to_string(),
        (err, "") => err.to_string(),
        (err, out) => format!("{err}\n{out}"),
    }
}

/// Run git and return its trimmed stdout
///
/// # Errors
///
/// Returns [`GitError::Failed`] with `action` and git's diagnostic when git
/// exits unsuccessfully.
pub(crate) fn git_output<I, S>(repo: &Repository, args: I, action: &str) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = spawn(repo, args)?;
    if !output.status.success() {
        return Err(GitError::failed(action, diagnostic(&output)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run git for its side effect only
///
/// # Errors
///
/// Returns [`GitError::Failed`] with `action` and git's diagnostic when git
/// exits unsuccessfully.
pub(crate) fn git_run<I, S>(repo: &Repository, args: I, action: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    git_output(repo, args, action).map(|_| ())
}
