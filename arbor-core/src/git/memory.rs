//! Snapshot-backed [`BranchMetadataSource`] built from literal data.

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{BranchCatalog, BranchInfo};
use super::source::{BranchMetadataSource, DETACHED_HEAD};
use crate::error::Result;

/// In-memory branch metadata, useful for callers that already hold a
/// snapshot and for exercising the renderer without a repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
  catalog: BranchCatalog,
  live_upstreams: BTreeMap<String, String>,
  ref_hashes: BTreeMap<String, String>,
  subjects: BTreeMap<String, String>,
  tags: BTreeSet<String>,
  remotes: Vec<String>,
  current_branch: Option<String>,
  head_hash: String,
}

impl InMemorySource {
  /// Create an empty source with a detached, hashless HEAD.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a local branch.
  pub fn with_branch(mut self, info: BranchInfo) -> Self {
    if let Some(hash) = &info.hash {
      self.ref_hashes.insert(info.name.clone(), hash.clone());
    }
    self.catalog.insert_local(info);
    self
  }

  /// Add a known external name (remote branch, tag) with an optional hash.
  pub fn with_external(mut self, name: impl Into<String>, hash: Option<&str>) -> Self {
    let name = name.into();
    if let Some(hash) = hash {
      self.ref_hashes.insert(name.clone(), hash.to_string());
    }
    self.catalog.insert_external(name);
    self
  }

  /// Answer `resolve_upstream(branch)` with `upstream` even though the bulk
  /// listing does not record it.
  pub fn with_live_upstream(mut self, branch: impl Into<String>, upstream: impl Into<String>) -> Self {
    self.live_upstreams.insert(branch.into(), upstream.into());
    self
  }

  /// Record a tag name.
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.insert(tag.into());
    self
  }

  /// Record a remote name.
  pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
    self.remotes.push(remote.into());
    self
  }

  /// Record the commit subject for a ref.
  pub fn with_subject(mut self, name: impl Into<String>, subject: impl Into<String>) -> Self {
    self.subjects.insert(name.into(), subject.into());
    self
  }

  /// Check out `branch` at `hash`.
  pub fn with_head(mut self, branch: impl Into<String>, hash: impl Into<String>) -> Self {
    self.current_branch = Some(branch.into());
    self.head_hash = hash.into();
    self
  }

  /// Detach HEAD at `hash`.
  pub fn with_detached_head(mut self, hash: impl Into<String>) -> Self {
    self.current_branch = None;
    self.head_hash = hash.into();
    self
  }
}

impl BranchMetadataSource for InMemorySource {
  fn list_branches(&self, include_tracking_status: bool) -> Result<BranchCatalog> {
    if include_tracking_status {
      return Ok(self.catalog.clone());
    }

    let mut catalog = BranchCatalog::new();
    for name in self.catalog.names() {
      match self.catalog.lookup(name).local() {
        Some(info) => catalog.insert_local(info.clone().with_tracking(0, 0)),
        None => catalog.insert_external(name),
      }
    }
    Ok(catalog)
  }

  fn resolve_upstream(&self, branch: &str) -> Option<String> {
    self.live_upstreams.get(branch).cloned()
  }

  fn current_branch(&self) -> Result<String> {
    Ok(self.current_branch.clone().unwrap_or_else(|| DETACHED_HEAD.to_string()))
  }

  fn head_hash(&self, _short: bool) -> Result<String> {
    Ok(self.head_hash.clone())
  }

  fn tags(&self) -> Result<BTreeSet<String>> {
    Ok(self.tags.clone())
  }

  fn short_hash(&self, name: &str) -> Option<String> {
    self.ref_hashes.get(name).cloned()
  }

  fn commit_subject(&self, name: &str) -> Option<String> {
    self.subjects.get(name).cloned()
  }

  fn remote_names(&self) -> Vec<String> {
    self.remotes.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn listing_without_tracking_zeroes_counts() {
    let source = InMemorySource::new()
      .with_branch(BranchInfo::new("feature", Some("1111111".into()), Some("main".into())).with_tracking(2, 3));

    let plain = source.list_branches(false).unwrap();
    let tracked = source.list_branches(true).unwrap();

    let plain_info = plain.lookup("feature").local().unwrap();
    assert_eq!((plain_info.ahead, plain_info.behind), (0, 0));
    let tracked_info = tracked.lookup("feature").local().unwrap();
    assert_eq!((tracked_info.ahead, tracked_info.behind), (2, 3));
  }

  #[test]
  fn detached_head_reports_sentinel_name() {
    let source = InMemorySource::new().with_detached_head("abcdef0");
    assert_eq!(source.current_branch().unwrap(), DETACHED_HEAD);
    assert_eq!(source.head_hash(true).unwrap(), "abcdef0");
  }
}
