//! Tests for worktree listing and removal

use crate::common::{TestFixture, assert_paths_eq, git_available};
use gelete::git::{BranchManager, BranchMutator, GitError, WorktreeManager};
use pretty_assertions::assert_eq;

#[test]
fn test_list_includes_main_worktree() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    let repo = fixture.repository();

    let worktrees = WorktreeManager::new(&repo).list()?;
    assert_eq!(worktrees.len(), 1);
    assert_paths_eq(&worktrees[0].path, &fixture.repo_path, "main worktree path");
    assert_eq!(worktrees[0].branch.as_deref(), Some("master"));
    assert!(!worktrees[0].locked);
    Ok(())
}

#[test]
fn test_list_linked_worktrees() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_branch("feature/open")?;
    fixture.create_branch("pinned")?;
    let open_path = fixture.add_worktree("feature/open")?;
    let pinned_path = fixture.add_worktree("pinned")?;
    fixture.lock_worktree("pinned")?;

    let repo = fixture.repository();
    let manager = WorktreeManager::new(&repo);
    let worktrees = manager.list()?;
    assert_eq!(worktrees.len(), 3);

    let open = manager
        .for_branch("feature/open")?
        .ok_or("no worktree for feature/open")?;
    assert_eq!(open.path, open_path);
    assert!(!open.locked);

    let pinned = manager.for_branch("pinned")?.ok_or("no worktree for pinned")?;
    assert_eq!(pinned.path, pinned_path);
    assert!(pinned.locked);

    assert!(manager.for_branch("master")?.is_some());
    assert!(manager.for_branch("nothing-here")?.is_none());
    Ok(())
}

#[test]
fn test_remove_unlocked_worktree_then_delete_branch() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_branch("topic")?;
    let path = fixture.add_worktree("topic")?;

    let repo = fixture.repository();
    let branches = BranchManager::new(&repo);

    // A checked-out branch cannot be deleted
    assert!(branches.delete("topic").is_err());
    assert!(fixture.branch_exists("topic"));

    WorktreeManager::new(&repo).remove(&path)?;
    assert!(!path.exists());

    branches.delete("topic")?;
    assert!(!fixture.branch_exists("topic"));
    Ok(())
}

#[test]
fn test_locked_worktree_needs_force() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.create_branch("pinned")?;
    let path = fixture.add_worktree("pinned")?;
    fixture.lock_worktree("pinned")?;

    let repo = fixture.repository();
    let manager = WorktreeManager::new(&repo);

    let err = manager.remove(&path).err().ok_or("locked worktree was removed")?;
    assert!(matches!(err, GitError::Failed { .. }));
    assert!(err.to_string().contains("locked"), "diagnostic: {err}");
    assert!(path.exists());

    manager.force_remove(&path)?;
    assert!(!path.exists());
    assert!(manager.for_branch("pinned")?.is_none());

    BranchManager::new(&repo).delete("pinned")?;
    assert!(!fixture.branch_exists("pinned"));
    Ok(())
}

#[test]
fn test_force_remove_unknown_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    let repo = fixture.repository();
    let missing = fixture.worktree_path().join("never-created");

    let manager = WorktreeManager::new(&repo);
    assert!(matches!(
        manager.force_remove(&missing),
        Err(GitError::Failed { .. })
    ));
    assert!(matches!(
        manager.remove(&missing),
        Err(GitError::Failed { .. })
    ));
    Ok(())
}
