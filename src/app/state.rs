//! Selection and confirmation state machine

use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::outcome::{FailureKind, Outcome};
use crate::config::Config;
use crate::git::{BranchMutator, Worktree, find_for_branch};

/// Which deletion pass is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Safe deletion of every selected branch
    Safe,
    /// Forced deletion of the branches refused as unmerged
    Forced,
}

/// Current application mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor and toggling branches
    #[default]
    Selection,
    /// Asking whether to delete the selected branches
    Confirmation,
    /// A deletion pass is about to run
    Deleting(Pass),
    /// Asking whether to force delete the unmerged branches
    ForceConfirmation,
    /// Finished; the next key press exits
    Done,
}

/// Main application state
///
/// Owned by the caller and advanced through its methods; nothing else
/// reads or writes the selection or the outcome.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Current application mode
    pub mode: Mode,

    /// Whether the application should quit
    pub should_quit: bool,

    branches: Vec<String>,
    selected: HashMap<String, bool>,
    cursor: usize,
    worktrees: Vec<Worktree>,
    outcome: Outcome,
}

impl App {
    /// Create a session over a snapshot of deletable branches
    #[must_use]
    pub fn new(config: Config, branches: Vec<String>, worktrees: Vec<Worktree>) -> Self {
        Self {
            config,
            mode: Mode::Selection,
            should_quit: false,
            branches,
            selected: HashMap::new(),
            cursor: 0,
            worktrees,
            outcome: Outcome::default(),
        }
    }

    /// Deletable branches in display order
    #[must_use]
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// Index of the branch under the cursor
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `branch` is selected for deletion
    #[must_use]
    pub fn is_selected(&self, branch: &str) -> bool {
        self.selected.get(branch).copied().unwrap_or(false)
    }

    /// Selected branches in display order
    #[must_use]
    pub fn selected_branches(&self) -> Vec<&str> {
        self.branches
            .iter()
            .filter(|branch| self.is_selected(branch))
            .map(String::as_str)
            .collect()
    }

    /// Number of selected branches
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.values().filter(|&&on| on).count()
    }

    /// Worktree that has `branch` checked out, from the start-up snapshot
    #[must_use]
    pub fn worktree_for(&self, branch: &str) -> Option<&Worktree> {
        find_for_branch(&self.worktrees, branch)
    }

    /// Deletion results so far
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Move the cursor to the next branch, stopping at the last one
    pub const fn select_next(&mut self) {
        if self.cursor + 1 < self.branches.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the previous branch, stopping at the first one
    pub const fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the first branch
    pub const fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last branch
    pub const fn select_last(&mut self) {
        self.cursor = self.branches.len().saturating_sub(1);
    }

    /// Flip the selection of the branch under the cursor
    pub fn toggle_selected(&mut self) {
        let Some(branch) = self.branches.get(self.cursor) else {
            return;
        };
        let entry = self.selected.entry(branch.clone()).or_insert(false);
        *entry = !*entry;
        debug!(branch = %branch, selected = *entry, "Toggled branch");
    }

    /// Ask for confirmation if at least one branch is selected
    pub fn request_delete(&mut self) {
        if self.mode == Mode::Selection && self.selected_count() > 0 {
            self.mode = Mode::Confirmation;
        }
    }

    /// Leave the selection list without deleting anything
    pub fn quit(&mut self) {
        if self.mode == Mode::Selection {
            self.mode = Mode::Done;
            self.should_quit = true;
        }
    }

    /// Accept the pending prompt
    pub fn confirm(&mut self) {
        self.mode = match self.mode {
            Mode::Confirmation => Mode::Deleting(Pass::Safe),
            Mode::ForceConfirmation => Mode::Deleting(Pass::Forced),
            other => other,
        };
    }

    /// Reject the pending prompt
    ///
    /// Declining the first prompt returns to the list with the selection
    /// intact; declining force deletion finishes, leaving those branches.
    pub fn decline(&mut self) {
        self.mode = match self.mode {
            Mode::Confirmation => Mode::Selection,
            Mode::ForceConfirmation => Mode::Done,
            other => other,
        };
    }

    /// Exit once the session is done
    pub fn acknowledge(&mut self) {
        if self.mode == Mode::Done {
            self.should_quit = true;
        }
    }

    /// Run the pending deletion pass, if any
    ///
    /// Branches are processed one at a time; a failure never stops the
    /// rest of the pass.
    pub fn process_deletions(&mut self, mutator: &impl BranchMutator) {
        match self.mode {
            Mode::Deleting(Pass::Safe) => self.delete_selected(mutator),
            Mode::Deleting(Pass::Forced) => self.force_delete_unmerged(mutator),
            _ => {}
        }
    }

    fn delete_selected(&mut self, mutator: &impl BranchMutator) {
        self.outcome = Outcome::default();

        let targets: Vec<String> = self
            .selected_branches()
            .into_iter()
            .map(String::from)
            .collect();
        info!(count = targets.len(), "Deleting selected branches");

        for branch in &targets {
            match mutator.delete(branch) {
                Ok(()) => self.outcome.record_deleted(branch),
                Err(e) => {
                    let kind = self.outcome.record_failure(branch, e.to_string());
                    match kind {
                        FailureKind::Unmerged => debug!(branch = %branch, "Branch is not merged"),
                        FailureKind::Other => warn!(branch = %branch, error = %e, "Delete failed"),
                    }
                }
            }
        }

        self.mode = if self.outcome.unmerged().is_empty() {
            Mode::Done
        } else {
            Mode::ForceConfirmation
        };
    }

    fn force_delete_unmerged(&mut self, mutator: &impl BranchMutator) {
        let targets = self.outcome.unmerged_names();
        info!(count = targets.len(), "Force deleting unmerged branches");

        for branch in &targets {
            match mutator.force_delete(branch) {
                Ok(()) => self.outcome.record_deleted(branch),
                Err(e) => {
                    warn!(branch = %branch, error = %e, "Force delete failed");
                    self.outcome.record_failed(branch, e.to_string());
                }
            }
        }

        self.mode = Mode::Done;
    }
}
