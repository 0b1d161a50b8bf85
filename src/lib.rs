//! gelete - Interactive deletion of local git branches
//!
//! Lists the local branches of the repository in the current directory
//! (minus the one checked out), lets the user pick some in a terminal UI,
//! deletes them after confirmation and offers to force delete any that git
//! refuses as unmerged.

pub mod app;
pub mod config;
pub mod git;
pub mod tui;

pub use app::{App, Mode, Outcome};
pub use config::Config;
pub use git::{GitError, Repository};
