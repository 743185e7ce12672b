//! Parent/child forest construction from recorded upstreams.
//!
//! Every local branch is hung under its effective parent. Parents that are
//! not local branches themselves (remote branches, tags, upstreams git can no
//! longer resolve, and the empty "no upstream" name) become roots of the
//! forest and seed the traversal.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::git::{BranchCatalog, BranchLookup, BranchMetadataSource};

/// Parent key used for branches that do not track anything.
pub const NO_UPSTREAM: &str = "";

/// How a forest node should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  /// The synthetic parent of branches without an upstream.
  NoUpstream,
  /// An upstream name that could not be resolved to any ref.
  Gone,
  /// A real branch, local or external.
  Branch,
}

/// Upstream forest for one rendering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
  parent_to_children: BTreeMap<String, Vec<String>>,
  roots: BTreeSet<String>,
  gone: BTreeSet<String>,
}

impl Forest {
  /// Anchors without local metadata, in lexicographic order.
  pub fn roots(&self) -> &BTreeSet<String> {
    &self.roots
  }

  /// Upstream names that could not be resolved.
  pub fn gone(&self) -> &BTreeSet<String> {
    &self.gone
  }

  /// Children recorded under `parent`, without consuming them.
  pub fn children(&self, parent: &str) -> Option<&[String]> {
    self.parent_to_children.get(parent).map(Vec::as_slice)
  }

  /// Remove and return the children of `parent`, sorted by name.
  ///
  /// Each list can only be taken once, which bounds any traversal of the
  /// forest even when the upstream graph contains cycles.
  pub fn take_children(&mut self, parent: &str) -> Vec<String> {
    let mut children = self.parent_to_children.remove(parent).unwrap_or_default();
    children.sort();
    children
  }

  /// The first parent whose children have not been taken yet.
  pub fn first_unvisited_parent(&self) -> Option<String> {
    self.parent_to_children.keys().next().cloned()
  }

  /// Presentation kind of a node.
  pub fn node_kind(&self, name: &str) -> NodeKind {
    if name == NO_UPSTREAM {
      NodeKind::NoUpstream
    } else if self.gone.contains(name) {
      NodeKind::Gone
    } else {
      NodeKind::Branch
    }
  }

  /// Whether `name` is unusable as a parent (empty or gone).
  pub fn is_invalid_parent(&self, name: &str) -> bool {
    name == NO_UPSTREAM || self.gone.contains(name)
  }

  /// Returns `true` when no branch was placed in the forest, or every
  /// children list has already been taken.
  pub fn is_empty(&self) -> bool {
    self.parent_to_children.is_empty()
  }
}

/// Builds a [`Forest`] from a catalog snapshot.
pub struct TopologyBuilder<'a> {
  source: &'a dyn BranchMetadataSource,
}

impl<'a> TopologyBuilder<'a> {
  /// Create a builder that re-resolves missing upstreams through `source`.
  pub fn new(source: &'a dyn BranchMetadataSource) -> Self {
    Self { source }
  }

  /// Resolve the effective parent of every local branch.
  ///
  /// An upstream present in the catalog (local or external) is trusted as
  /// is. Anything else is looked up individually; when that also fails the
  /// recorded name is marked gone.
  pub fn build(&self, catalog: &BranchCatalog) -> Forest {
    let mut forest = Forest::default();

    for info in catalog.local_branches() {
      let recorded = info.upstream.clone().unwrap_or_default();

      let parent = if catalog.lookup(&recorded).is_known() {
        recorded
      } else {
        match self.source.resolve_upstream(&info.name) {
          Some(resolved) => {
            debug!(branch = %info.name, upstream = %resolved, "resolved upstream on demand");
            resolved
          }
          None => {
            debug!(branch = %info.name, upstream = %recorded, "upstream is gone");
            forest.gone.insert(recorded.clone());
            recorded
          }
        }
      };

      if !matches!(catalog.lookup(&parent), BranchLookup::Local(_)) {
        forest.roots.insert(parent.clone());
      }

      forest
        .parent_to_children
        .entry(parent)
        .or_default()
        .push(info.name.clone());
    }

    debug!(
      roots = forest.roots.len(),
      gone = forest.gone.len(),
      "built upstream forest"
    );
    forest
  }
}
