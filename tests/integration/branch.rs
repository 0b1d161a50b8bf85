//! Tests for branch deletion

use crate::common::{TestFixture, git_available};
use gelete::app::{FailureKind, classify_failure};
use gelete::git::{BranchManager, BranchMutator};
use pretty_assertions::assert_eq;

#[test]
fn test_delete_merged_branch() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_branch("done")?;

    let repo = fixture.repository();
    BranchManager::new(&repo).delete("done")?;

    assert!(!fixture.branch_exists("done"));
    assert_eq!(repo.list_branches()?, Vec::<String>::new());
    Ok(())
}

#[test]
fn test_delete_missing_branch_fails() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_branch("once")?;

    let repo = fixture.repository();
    let manager = BranchManager::new(&repo);
    manager.delete("once")?;

    for attempt in 1..=3 {
        let err = manager
            .delete("once")
            .err()
            .ok_or_else(|| format!("delete attempt {attempt} succeeded"))?;
        assert_eq!(
            classify_failure(&err.to_string()),
            FailureKind::Other,
            "attempt {attempt}: {err}"
        );
        assert!(err.to_string().contains("once"), "diagnostic: {err}");

        let err = manager
            .force_delete("once")
            .err()
            .ok_or_else(|| format!("force delete attempt {attempt} succeeded"))?;
        assert_eq!(classify_failure(&err.to_string()), FailureKind::Other);
    }
    assert!(!fixture.branch_exists("once"));
    Ok(())
}

#[test]
fn test_unmerged_branch_needs_force() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_unmerged_branch("wip")?;

    let repo = fixture.repository();
    let manager = BranchManager::new(&repo);

    let err = manager.delete("wip").err().ok_or("unmerged branch was deleted")?;
    assert_eq!(
        classify_failure(&err.to_string()),
        FailureKind::Unmerged,
        "diagnostic: {err}"
    );
    assert!(fixture.branch_exists("wip"));

    manager.force_delete("wip")?;
    assert!(!fixture.branch_exists("wip"));
    Ok(())
}

#[test]
fn test_current_branch_is_never_deleted() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    let repo = fixture.repository();
    let manager = BranchManager::new(&repo);

    let err = manager.force_delete("master").err().ok_or("current branch deleted")?;
    assert_eq!(classify_failure(&err.to_string()), FailureKind::Other);
    assert!(fixture.branch_exists("master"));
    Ok(())
}
