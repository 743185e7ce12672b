//! Sparse per-branch metadata keyed by branch name.
//!
//! A catalog holds two kinds of entries: local branches with full
//! [`BranchInfo`], and "external" names that some local branch references as
//! its upstream but which are not local branches themselves (remote-tracking
//! branches, tags, other refs). Lookups distinguish a name that is entirely
//! unknown from one that is known to be external, see [`BranchLookup`].

use std::collections::BTreeMap;

/// Metadata recorded for a single local branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchInfo {
  /// Short branch name (e.g. `feature/login`).
  pub name: String,
  /// Abbreviated commit hash of the branch tip, if it could be resolved.
  pub hash: Option<String>,
  /// Short name of the configured upstream, if any.
  pub upstream: Option<String>,
  /// Commits on the branch that are not on its upstream. Zero unless tracking
  /// status was requested.
  pub ahead: u32,
  /// Commits on the upstream that are not on the branch. Zero unless tracking
  /// status was requested.
  pub behind: u32,
}

impl BranchInfo {
  /// Create branch metadata with no tracking counts.
  pub fn new(name: impl Into<String>, hash: Option<String>, upstream: Option<String>) -> Self {
    Self {
      name: name.into(),
      hash,
      upstream,
      ahead: 0,
      behind: 0,
    }
  }

  /// Attach ahead/behind counts relative to the upstream.
  pub fn with_tracking(mut self, ahead: u32, behind: u32) -> Self {
    self.ahead = ahead;
    self.behind = behind;
    self
  }
}

/// Result of looking a name up in a [`BranchCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLookup<'a> {
  /// The name is not known at all.
  Absent,
  /// The name is known but is not a local branch.
  External,
  /// The name is a local branch.
  Local(&'a BranchInfo),
}

impl<'a> BranchLookup<'a> {
  /// Local branch metadata, if the lookup found one.
  pub fn local(self) -> Option<&'a BranchInfo> {
    match self {
      BranchLookup::Local(info) => Some(info),
      _ => None,
    }
  }

  /// Whether the name is present in the catalog in any form.
  pub fn is_known(self) -> bool {
    !matches!(self, BranchLookup::Absent)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
  External,
  Local(BranchInfo),
}

/// Snapshot of every branch name known for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCatalog {
  entries: BTreeMap<String, Entry>,
}

impl BranchCatalog {
  /// Create an empty catalog.
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a local branch, replacing any previous entry with the same name.
  pub fn insert_local(&mut self, info: BranchInfo) {
    self.entries.insert(info.name.clone(), Entry::Local(info));
  }

  /// Record a name as known-but-external. An existing local entry wins.
  pub fn insert_external(&mut self, name: impl Into<String>) {
    self.entries.entry(name.into()).or_insert(Entry::External);
  }

  /// Look up a name.
  pub fn lookup(&self, name: &str) -> BranchLookup<'_> {
    match self.entries.get(name) {
      None => BranchLookup::Absent,
      Some(Entry::External) => BranchLookup::External,
      Some(Entry::Local(info)) => BranchLookup::Local(info),
    }
  }

  /// Iterate over local branches in name order.
  pub fn local_branches(&self) -> impl Iterator<Item = &BranchInfo> {
    self.entries.values().filter_map(|entry| match entry {
      Entry::Local(info) => Some(info),
      Entry::External => None,
    })
  }

  /// Iterate over every known name (local and external) in name order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Number of entries, local and external.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the catalog holds no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<BranchInfo> for BranchCatalog {
  fn from_iter<I: IntoIterator<Item = BranchInfo>>(iter: I) -> Self {
    let mut catalog = Self::new();
    for info in iter {
      catalog.insert_local(info);
    }
    catalog
  }
}
