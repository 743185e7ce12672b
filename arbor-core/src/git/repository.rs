//! [`BranchMetadataSource`] backed by a `git2` repository.

use std::collections::BTreeSet;
use std::path::Path;

use git2::{BranchType, Repository};
use tracing::debug;

use super::catalog::{BranchCatalog, BranchInfo};
use super::source::{BranchMetadataSource, DETACHED_HEAD};
use crate::error::{ArborError, Result};

const REF_PREFIXES: [&str; 3] = ["refs/heads/", "refs/remotes/", "refs/tags/"];

/// Reads branch metadata from a local repository.
pub struct GitBranchSource {
  repo: Repository,
}

impl GitBranchSource {
  /// Wrap an already opened repository.
  pub fn new(repo: Repository) -> Self {
    Self { repo }
  }

  /// Discover the repository containing `path`.
  pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let repo = Repository::discover(path).map_err(|err| {
      debug!(path = %path.display(), error = %err, "repository discovery failed");
      ArborError::NotARepository(path.display().to_string())
    })?;
    Ok(Self::new(repo))
  }

  /// Fetch URL of the remote called `name`.
  pub fn remote_url(&self, name: &str) -> Option<String> {
    let remote = self.repo.find_remote(name).ok()?;
    remote.url().map(str::to_string)
  }

  fn branch_info(&self, branch: &git2::Branch<'_>, catalog: &mut BranchCatalog, include_tracking: bool) -> Result<()> {
    let Some(name) = branch.name()? else {
      debug!("skipping branch with a non UTF-8 name");
      return Ok(());
    };
    let reference = branch.get();
    let tip = reference.peel_to_commit().ok();
    let hash = tip
      .as_ref()
      .and_then(|commit| commit.as_object().short_id().ok())
      .and_then(|buf| buf.as_str().map(str::to_string));

    let upstream_ref = reference
      .name()
      .and_then(|refname| self.repo.branch_upstream_name(refname).ok())
      .and_then(|buf| buf.as_str().map(str::to_string));
    let upstream = upstream_ref.as_deref().map(shorten_ref_name);

    let mut info = BranchInfo::new(name, hash, upstream.clone());

    if let (Some(full), Some(short)) = (upstream_ref.as_deref(), upstream) {
      match self.repo.find_reference(full) {
        Ok(upstream_reference) => {
          catalog.insert_external(short);
          if include_tracking
            && let (Some(local), Ok(remote)) = (tip.as_ref(), upstream_reference.peel_to_commit())
          {
            let (ahead, behind) = self.repo.graph_ahead_behind(local.id(), remote.id())?;
            info = info.with_tracking(saturating_u32(ahead), saturating_u32(behind));
          }
        }
        Err(err) => debug!(branch = name, upstream = full, error = %err, "upstream ref is missing"),
      }
    }

    catalog.insert_local(info);
    Ok(())
  }
}

impl BranchMetadataSource for GitBranchSource {
  fn list_branches(&self, include_tracking_status: bool) -> Result<BranchCatalog> {
    let mut catalog = BranchCatalog::new();
    for branch in self.repo.branches(Some(BranchType::Local))? {
      let (branch, _) = branch?;
      self.branch_info(&branch, &mut catalog, include_tracking_status)?;
    }
    debug!(entries = catalog.len(), "listed branches");
    Ok(catalog)
  }

  fn resolve_upstream(&self, branch: &str) -> Option<String> {
    let local = self.repo.find_branch(branch, BranchType::Local).ok()?;
    let upstream = local.upstream().ok()?;
    upstream.name().ok().flatten().map(str::to_string)
  }

  fn current_branch(&self) -> Result<String> {
    if self.repo.head_detached()? {
      return Ok(DETACHED_HEAD.to_string());
    }

    match self.repo.head() {
      Ok(head) => Ok(head.shorthand().unwrap_or(DETACHED_HEAD).to_string()),
      Err(err) if err.code() == git2::ErrorCode::UnbornBranch => {
        let head = self.repo.find_reference("HEAD")?;
        Ok(head.symbolic_target().map(shorten_ref_name).unwrap_or_default())
      }
      Err(err) => Err(err.into()),
    }
  }

  fn head_hash(&self, short: bool) -> Result<String> {
    let commit = self.repo.head()?.peel_to_commit()?;
    if short {
      let id = commit.as_object().short_id()?;
      Ok(id.as_str().unwrap_or_default().to_string())
    } else {
      Ok(commit.id().to_string())
    }
  }

  fn tags(&self) -> Result<BTreeSet<String>> {
    let names = self.repo.tag_names(None)?;
    Ok(names.iter().flatten().map(str::to_string).collect())
  }

  fn short_hash(&self, name: &str) -> Option<String> {
    let object = self.repo.revparse_single(name).ok()?;
    let commit = object.peel_to_commit().ok()?;
    let id = commit.as_object().short_id().ok()?;
    id.as_str().map(str::to_string)
  }

  fn commit_subject(&self, name: &str) -> Option<String> {
    let object = self.repo.revparse_single(name).ok()?;
    let commit = object.peel_to_commit().ok()?;
    commit.summary().map(str::to_string)
  }

  fn remote_names(&self) -> Vec<String> {
    match self.repo.remotes() {
      Ok(remotes) => remotes.iter().flatten().map(str::to_string).collect(),
      Err(err) => {
        debug!(error = %err, "failed to list remotes");
        Vec::new()
      }
    }
  }
}

/// Strip the `refs/heads/`, `refs/remotes/` or `refs/tags/` namespace.
pub fn shorten_ref_name(refname: &str) -> String {
  REF_PREFIXES
    .iter()
    .find_map(|prefix| refname.strip_prefix(prefix))
    .unwrap_or(refname)
    .to_string()
}

fn saturating_u32(value: usize) -> u32 {
  u32::try_from(value).unwrap_or(u32::MAX)
}
