//! Contract for the collaborator that supplies raw branch metadata.

use std::collections::BTreeSet;

use super::catalog::BranchCatalog;
use crate::error::Result;

/// Name reported by [`BranchMetadataSource::current_branch`] when HEAD is
/// detached.
pub const DETACHED_HEAD: &str = "HEAD";

/// Supplies a snapshot of branch metadata for one rendering run.
///
/// Implementations must be cheap to query repeatedly: the topology builder
/// and presentation engine call the single-branch lookups once per node.
pub trait BranchMetadataSource {
  /// List every local branch plus the external names they track.
  ///
  /// Ahead/behind counts are only populated when `include_tracking_status` is
  /// set.
  fn list_branches(&self, include_tracking_status: bool) -> Result<BranchCatalog>;

  /// Resolve the upstream of a single branch on demand.
  fn resolve_upstream(&self, branch: &str) -> Option<String>;

  /// The checked-out branch, or [`DETACHED_HEAD`] when HEAD is detached.
  fn current_branch(&self) -> Result<String>;

  /// Hash of the commit HEAD points at.
  fn head_hash(&self, short: bool) -> Result<String>;

  /// Names of every tag in the repository.
  fn tags(&self) -> Result<BTreeSet<String>>;

  /// Abbreviated hash of any ref, or `None` when it does not resolve.
  fn short_hash(&self, name: &str) -> Option<String>;

  /// First line of the commit message at the tip of `name`.
  fn commit_subject(&self, name: &str) -> Option<String>;

  /// Names of the configured remotes.
  fn remote_names(&self) -> Vec<String>;
}
