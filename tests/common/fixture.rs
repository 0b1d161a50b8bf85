//! Test fixture for setting up temporary git repositories

use std::fs;
use std::path::{Path, PathBuf};

use gelete::git::Repository;
use git2::{Oid, RepositoryInitOptions, Signature, WorktreeAddOptions};
use tempfile::TempDir;

/// Test fixture that sets up a temporary git repository on `master`
/// with one commit
pub struct TestFixture {
    /// Temporary directory containing the git repo
    _temp_dir: TempDir,
    /// Path to the git repository
    pub repo_path: PathBuf,
    /// Temporary directory for worktrees
    pub worktree_dir: TempDir,
    repo: git2::Repository,
}

impl TestFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        // Canonicalize to handle symlinked temp dirs.
        let repo_path = temp_dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| temp_dir.path().to_path_buf());

        // Git's default branch is user-configurable; pin it so the current
        // branch is the same everywhere.
        let mut init_opts = RepositoryInitOptions::new();
        init_opts.initial_head("master");
        let repo = git2::Repository::init_opts(&repo_path, &init_opts)?;
        repo.set_head("refs/heads/master")?;
        let sig = Signature::now("Test", "test@test.com")?;

        let readme_path = repo_path.join("README.md");
        fs::write(&readme_path, "# Test Repository\n")?;

        let tree_id = {
            let mut index = repo.index()?;
            index.add_path(Path::new("README.md"))?;
            index.write()?;
            index.write_tree()?
        };
        {
            let tree = repo.find_tree(tree_id)?;
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
        }

        Ok(Self {
            _temp_dir: temp_dir,
            repo_path,
            worktree_dir: TempDir::new()?,
            repo,
        })
    }

    /// The fixture repository as seen by gelete
    pub fn repository(&self) -> Repository {
        Repository::new(&self.repo_path)
    }

    fn head_oid(&self) -> Result<Oid, git2::Error> {
        self.repo.head()?.peel_to_commit().map(|c| c.id())
    }

    /// Create a branch at HEAD, so it is fully merged
    pub fn create_branch(&self, name: &str) -> Result<(), git2::Error> {
        let head = self.repo.find_commit(self.head_oid()?)?;
        self.repo.branch(name, &head, false)?;
        Ok(())
    }

    /// Create a branch one commit ahead of HEAD, so `git branch -d` refuses it
    pub fn create_unmerged_branch(&self, name: &str) -> Result<(), git2::Error> {
        let parent = self.repo.find_commit(self.head_oid()?)?;
        let blob = self.repo.blob(format!("work on {name}\n").as_bytes())?;

        let mut builder = self.repo.treebuilder(Some(&parent.tree()?))?;
        builder.insert(format!("{}.txt", name.replace('/', "-")), blob, 0o100_644)?;
        let tree = self.repo.find_tree(builder.write()?)?;

        let sig = Signature::now("Test", "test@test.com")?;
        self.repo.commit(
            Some(&format!("refs/heads/{name}")),
            &sig,
            &sig,
            &format!("Work on {name}"),
            &tree,
            &[&parent],
        )?;
        Ok(())
    }

    /// Check out `branch` in a new worktree and return its canonical path
    pub fn add_worktree(&self, branch: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let name = branch.replace('/', "-");
        let path = self.worktree_path().join(&name);
        let reference = self.repo.find_reference(&format!("refs/heads/{branch}"))?;

        let mut opts = WorktreeAddOptions::new();
        opts.reference(Some(&reference));
        self.repo.worktree(&name, &path, Some(&opts))?;

        Ok(path.canonicalize().unwrap_or(path))
    }

    /// Lock the worktree created for `branch`
    pub fn lock_worktree(&self, branch: &str) -> Result<(), git2::Error> {
        let worktree = self.repo.find_worktree(&branch.replace('/', "-"))?;
        worktree.lock(Some("in use by test"))
    }

    /// Detach HEAD at the current commit
    pub fn detach_head(&self) -> Result<(), git2::Error> {
        self.repo.set_head_detached(self.head_oid()?)
    }

    /// Whether a local branch called `name` exists
    pub fn branch_exists(&self, name: &str) -> bool {
        self.repo.find_branch(name, git2::BranchType::Local).is_ok()
    }

    /// Returns the canonicalized worktree directory path.
    pub fn worktree_path(&self) -> PathBuf {
        self.worktree_dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| self.worktree_dir.path().to_path_buf())
    }
}
