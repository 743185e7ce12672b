//! Git repository management for testing
//!
//! This module provides utilities for creating temporary git repositories
//! and wiring up upstream relationships between their branches.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use git2::{BranchType, Repository, Signature};
use tempfile::TempDir;

/// A test guard that owns a temporary git repository. The directory is
/// removed when the guard is dropped.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl GitRepoTestGuard {
  /// Create a new test git repository
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path();

    let repo = Repository::init(temp_path).expect("Failed to initialize git repository");

    // Set test user configuration
    let mut config = repo.config().expect("Failed to get repository config");
    config
      .set_str("user.name", "Arbor Test User")
      .expect("Failed to set user.name");
    config
      .set_str("user.email", "arbor-test@example.com")
      .expect("Failed to set user.email");

    assert!(
      temp_path.join(".git").exists(),
      "Git repository was not properly initialized"
    );

    Self { temp_dir, repo }
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Short name of the branch HEAD points at
  pub fn head_branch(&self) -> String {
    self
      .repo
      .head()
      .expect("Repository has no HEAD")
      .shorthand()
      .expect("HEAD name is not UTF-8")
      .to_string()
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

/// Helper function to create a commit in a repository
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<()> {
  let workdir = repo.workdir().context("Repository has no working directory")?;
  fs::write(workdir.join(file_name), content)?;

  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;

  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;

  let signature = Signature::now("Test User", "test@example.com")?;

  match repo.head().ok().and_then(|head| head.peel_to_commit().ok()) {
    Some(parent) => repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?,
    None => repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?,
  };

  Ok(())
}

/// Helper function to create a branch in a repository
pub fn create_branch(repo: &Repository, branch_name: &str, start_point: Option<&str>) -> Result<()> {
  let head = if let Some(start) = start_point {
    repo
      .find_branch(start, BranchType::Local)?
      .into_reference()
      .peel_to_commit()?
  } else {
    repo.head()?.peel_to_commit()?
  };

  repo.branch(branch_name, &head, false)?;
  Ok(())
}

/// Helper function to checkout a branch
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let obj = repo
    .revparse_single(&format!("refs/heads/{branch_name}"))?
    .peel_to_commit()?;

  repo.checkout_tree(&obj.into_object(), None)?;
  repo.set_head(&format!("refs/heads/{branch_name}"))?;

  Ok(())
}

/// Create `refs/remotes/<remote>/<branch>` pointing at the local branch tip,
/// registering the remote first when it does not exist yet.
pub fn create_remote_tracking_branch(repo: &Repository, remote: &str, branch: &str) -> Result<()> {
  if repo.find_remote(remote).is_err() {
    repo.remote(remote, &format!("https://example.invalid/{remote}.git"))?;
  }

  let tip = repo
    .find_branch(branch, BranchType::Local)?
    .into_reference()
    .peel_to_commit()?;
  repo.reference(
    &format!("refs/remotes/{remote}/{branch}"),
    tip.id(),
    true,
    "arbor test fixture",
  )?;
  Ok(())
}

/// Make `branch` track `upstream` (a local branch or `remote/branch`).
pub fn set_upstream(repo: &Repository, branch: &str, upstream: &str) -> Result<()> {
  let mut local = repo.find_branch(branch, BranchType::Local)?;
  local.set_upstream(Some(upstream))?;
  Ok(())
}

/// Configure `branch` to track a local branch named `missing` that does not
/// exist.
pub fn set_gone_upstream(repo: &Repository, branch: &str, missing: &str) -> Result<()> {
  let mut config = repo.config()?;
  config.set_str(&format!("branch.{branch}.remote"), ".")?;
  config.set_str(&format!("branch.{branch}.merge"), &format!("refs/heads/{missing}"))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_creates_git_repo() {
    let git_repo = GitRepoTestGuard::new();
    assert!(git_repo.path().join(".git").exists());
  }

  #[test]
  fn remote_tracking_branch_points_at_local_tip() {
    let guard = GitRepoTestGuard::new();
    create_commit(&guard.repo, "a.txt", "a\n", "first").unwrap();
    let main = guard.head_branch();

    create_remote_tracking_branch(&guard.repo, "origin", &main).unwrap();

    let remote = guard
      .repo
      .find_reference(&format!("refs/remotes/origin/{main}"))
      .unwrap();
    let local = guard.repo.head().unwrap();
    assert_eq!(remote.target(), local.target());
  }

  #[test]
  fn set_upstream_records_tracking_branch() {
    let guard = GitRepoTestGuard::new();
    create_commit(&guard.repo, "a.txt", "a\n", "first").unwrap();
    let main = guard.head_branch();
    create_branch(&guard.repo, "feature", None).unwrap();

    set_upstream(&guard.repo, "feature", &main).unwrap();

    let feature = guard.repo.find_branch("feature", BranchType::Local).unwrap();
    let upstream = feature.upstream().unwrap();
    assert_eq!(upstream.name().unwrap(), Some(main.as_str()));
  }
}
