//! Review status collaborator contract.
//!
//! Review lookups may run in parallel inside a source, but the renderer only
//! ever sees a blocking iterator drained in enumeration order.

use std::collections::BTreeMap;

use owo_colors::AnsiColors;

/// Review state of the change associated with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewState {
  /// The change exists but has not been sent for review.
  Unsent,
  /// Waiting on reviewers.
  Waiting,
  /// Reviewers left feedback that needs a reply.
  Reply,
  /// Approved.
  Approved,
  /// Landed.
  Committed,
  /// Closed without landing.
  Closed,
  /// The lookup returned an error status.
  Error,
  /// Nothing is known about the branch.
  Unknown,
}

/// Display color recommended for a review state. `None` keeps the terminal
/// default.
pub fn color_for_state(state: ReviewState) -> Option<AnsiColors> {
  match state {
    ReviewState::Unsent => Some(AnsiColors::Red),
    ReviewState::Waiting => Some(AnsiColors::Blue),
    ReviewState::Reply => Some(AnsiColors::Yellow),
    ReviewState::Approved => Some(AnsiColors::Green),
    ReviewState::Committed => Some(AnsiColors::Magenta),
    ReviewState::Closed => Some(AnsiColors::Cyan),
    ReviewState::Error => Some(AnsiColors::White),
    ReviewState::Unknown => None,
  }
}

/// Result of a single review lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStatus {
  /// Branch the lookup was made for.
  pub branch: String,
  /// Review URL, if the branch has an associated change.
  pub url: Option<String>,
  /// Review state of that change.
  pub state: ReviewState,
}

impl ReviewStatus {
  /// A status carrying no information, used for failed or skipped lookups.
  pub fn unknown(branch: impl Into<String>) -> Self {
    Self {
      branch: branch.into(),
      url: None,
      state: ReviewState::Unknown,
    }
  }
}

/// Supplies review statuses for a set of branches.
pub trait ReviewStatusSource {
  /// Start lookups for `branches` and return their results lazily, in the
  /// same order. At most `max_parallel` lookups may be outstanding at once.
  ///
  /// Failed lookups must be reported as [`ReviewStatus::unknown`] rather than
  /// ending the sequence early.
  fn fetch_statuses(
    &self,
    branches: &[String],
    fine_grained: bool,
    max_parallel: usize,
  ) -> Box<dyn Iterator<Item = ReviewStatus> + '_>;
}

/// Offline source that knows nothing about any branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReviewStatus;

impl ReviewStatusSource for NoReviewStatus {
  fn fetch_statuses(
    &self,
    branches: &[String],
    _fine_grained: bool,
    _max_parallel: usize,
  ) -> Box<dyn Iterator<Item = ReviewStatus> + '_> {
    let statuses: Vec<_> = branches.iter().map(ReviewStatus::unknown).collect();
    Box::new(statuses.into_iter())
  }
}

/// Review URL and color per branch, drained from a [`ReviewStatusSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
  entries: BTreeMap<String, (Option<String>, Option<AnsiColors>)>,
}

impl StatusTable {
  /// Block on every result of `source` for `branches`, in order.
  pub fn collect(
    source: &dyn ReviewStatusSource,
    branches: &[String],
    fine_grained: bool,
    max_parallel: usize,
  ) -> Self {
    let mut entries = BTreeMap::new();
    for status in source.fetch_statuses(branches, fine_grained, max_parallel.max(1)) {
      entries.insert(status.branch, (status.url, color_for_state(status.state)));
    }
    Self { entries }
  }

  /// URL and color for `branch`; unknown branches map to `(None, None)`.
  pub fn get(&self, branch: &str) -> (Option<&str>, Option<AnsiColors>) {
    match self.entries.get(branch) {
      Some((url, color)) => (url.as_deref(), *color),
      None => (None, None),
    }
  }

  /// Number of branches with a recorded status.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no status was recorded.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  struct FixedSource {
    max_parallel_seen: Cell<usize>,
  }

  impl ReviewStatusSource for FixedSource {
    fn fetch_statuses(
      &self,
      branches: &[String],
      fine_grained: bool,
      max_parallel: usize,
    ) -> Box<dyn Iterator<Item = ReviewStatus> + '_> {
      self.max_parallel_seen.set(max_parallel);
      let state = if fine_grained {
        ReviewState::Approved
      } else {
        ReviewState::Waiting
      };
      Box::new(branches.to_vec().into_iter().map(move |branch| ReviewStatus {
        url: Some(format!("https://review.example/{branch}")),
        branch,
        state,
      }))
    }
  }

  #[test]
  fn collect_drains_every_status() {
    let source = FixedSource {
      max_parallel_seen: Cell::new(0),
    };
    let branches = vec!["alpha".to_string(), "beta".to_string()];

    let table = StatusTable::collect(&source, &branches, true, 0);

    assert_eq!(table.len(), 2);
    assert_eq!(
      table.get("beta"),
      (Some("https://review.example/beta"), Some(AnsiColors::Green))
    );
    assert_eq!(source.max_parallel_seen.get(), 1);
  }

  #[test]
  fn unknown_branches_have_no_url_or_color() {
    let table = StatusTable::collect(&NoReviewStatus, &["main".to_string()], false, 4);
    assert_eq!(table.get("main"), (None, None));
    assert_eq!(table.get("never-asked"), (None, None));
  }

  #[test]
  fn every_state_except_unknown_has_a_color() {
    assert_eq!(color_for_state(ReviewState::Unknown), None);
    assert_eq!(color_for_state(ReviewState::Unsent), Some(AnsiColors::Red));
    assert_eq!(color_for_state(ReviewState::Closed), Some(AnsiColors::Cyan));
  }
}
