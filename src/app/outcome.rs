//! Tally of a deletion session

use std::collections::BTreeMap;
use std::fmt;

/// Substrings of git's diagnostic that mean "refused because unmerged"
///
/// Matching on message text is brittle: git does not promise this wording
/// across versions. Commands run with `LC_ALL=C` so at least the language
/// is fixed.
pub const UNMERGED_MARKERS: &[&str] = &["not fully merged", "not merged"];

/// Why a safe deletion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The branch has commits that would be lost; force deletion may be offered
    Unmerged,
    /// Anything else (missing branch, checked out in a worktree, ...)
    Other,
}

/// Classify a deletion failure from its diagnostic text
#[must_use]
pub fn classify_failure(message: &str) -> FailureKind {
    if UNMERGED_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        FailureKind::Unmerged
    } else {
        FailureKind::Other
    }
}

/// Deleted branches and classified failures
///
/// A branch name is in at most one of `deleted`, `failed` and `unmerged`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    deleted: Vec<String>,
    failed: BTreeMap<String, String>,
    unmerged: BTreeMap<String, String>,
}

impl Outcome {
    /// Number of branches deleted so far
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Deleted branch names, in deletion order
    #[must_use]
    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }

    /// Branches that failed for reasons other than being unmerged
    #[must_use]
    pub const fn failed(&self) -> &BTreeMap<String, String> {
        &self.failed
    }

    /// Branches refused as unmerged and not (yet) force deleted
    #[must_use]
    pub const fn unmerged(&self) -> &BTreeMap<String, String> {
        &self.unmerged
    }

    /// Whether no deletion has been attempted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.failed.is_empty() && self.unmerged.is_empty()
    }

    pub(crate) fn record_deleted(&mut self, branch: &str) {
        self.failed.remove(branch);
        self.unmerged.remove(branch);
        self.deleted.push(branch.to_string());
    }

    /// File a safe-deletion failure under `unmerged` or `failed`
    pub(crate) fn record_failure(&mut self, branch: &str, message: String) -> FailureKind {
        let kind = classify_failure(&message);
        match kind {
            FailureKind::Unmerged => {
                self.failed.remove(branch);
                self.unmerged.insert(branch.to_string(), message);
            }
            FailureKind::Other => self.record_failed(branch, message),
        }
        kind
    }

    /// File a failure as general regardless of its text
    pub(crate) fn record_failed(&mut self, branch: &str, message: String) {
        self.unmerged.remove(branch);
        self.failed.insert(branch.to_string(), message);
    }

    /// Names still waiting for a force decision, in name order
    pub(crate) fn unmerged_names(&self) -> Vec<String> {
        self.unmerged.keys().cloned().collect()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deleted = self.deleted_count();
        if deleted > 0 {
            writeln!(f, "✓ Successfully deleted {deleted} branch(es)")?;
        }

        if !self.unmerged.is_empty() {
            writeln!(
                f,
                "• Skipped {} unmerged branch(es):",
                self.unmerged.len()
            )?;
            for branch in self.unmerged.keys() {
                writeln!(f, "  • {branch}")?;
            }
        }

        if !self.failed.is_empty() {
            writeln!(f, "✗ Failed to delete {} branch(es):", self.failed.len())?;
            for (branch, message) in &self.failed {
                writeln!(f, "  • {branch}: {message}")?;
            }
        }

        Ok(())
    }
}
