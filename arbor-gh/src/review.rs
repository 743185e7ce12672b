//! [`ReviewStatusSource`] backed by GitHub pull requests.
//!
//! One lookup task is spawned per branch up front, gated by a semaphore so at
//! most `max_parallel` requests are in flight. Results are handed back in
//! request order by blocking on each task in turn.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use anyhow::{Context, Result};
use arbor_core::{ReviewState, ReviewStatus, ReviewStatusSource};
use tokio::runtime::Runtime;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::models::{GitHubPullRequest, GitHubReview};
use crate::repo::GitHubRepo;

/// Looks up the pull request of each branch in one GitHub repository.
pub struct GitHubReviewSource {
  runtime: Runtime,
  client: Arc<GitHubClient>,
  repo: Arc<GitHubRepo>,
}

impl GitHubReviewSource {
  /// Create a source with its own async runtime.
  pub fn new(client: GitHubClient, repo: GitHubRepo) -> Result<Self> {
    let runtime = Runtime::new().context("Failed to create async runtime")?;
    Ok(Self {
      runtime,
      client: Arc::new(client),
      repo: Arc::new(repo),
    })
  }
}

impl ReviewStatusSource for GitHubReviewSource {
  fn fetch_statuses(
    &self,
    branches: &[String],
    fine_grained: bool,
    max_parallel: usize,
  ) -> Box<dyn Iterator<Item = ReviewStatus> + '_> {
    let permits = Arc::new(Semaphore::new(max_parallel.max(1)));
    debug!(repo = %self.repo, branches = branches.len(), max_parallel, "fetching review statuses");

    let pending: VecDeque<(String, JoinHandle<ReviewStatus>)> = branches
      .iter()
      .map(|branch| {
        let permits = Arc::clone(&permits);
        let client = Arc::clone(&self.client);
        let repo = Arc::clone(&self.repo);
        let name = branch.clone();
        let handle = self.runtime.spawn(async move {
          let _permit = permits.acquire_owned().await;
          lookup(&client, &repo, name, fine_grained).await
        });
        (branch.clone(), handle)
      })
      .collect();

    let runtime = &self.runtime;
    Box::new(pending.into_iter().map(move |(branch, handle)| {
      runtime.block_on(handle).unwrap_or_else(|err| {
        warn!(branch = %branch, error = %err, "review lookup task failed");
        ReviewStatus::unknown(branch)
      })
    }))
  }
}

async fn lookup(client: &GitHubClient, repo: &GitHubRepo, branch: String, fine_grained: bool) -> ReviewStatus {
  match pull_request_status(client, repo, &branch, fine_grained).await {
    Ok(Some((url, state))) => ReviewStatus {
      branch,
      url: Some(url),
      state,
    },
    Ok(None) => ReviewStatus::unknown(branch),
    Err(err) => {
      debug!(branch = %branch, error = %err, "review lookup failed");
      ReviewStatus::unknown(branch)
    }
  }
}

async fn pull_request_status(
  client: &GitHubClient,
  repo: &GitHubRepo,
  branch: &str,
  fine_grained: bool,
) -> Result<Option<(String, ReviewState)>> {
  let pulls = client
    .find_pull_requests_by_head_branch(&repo.owner, &repo.name, branch)
    .await?;
  let Some(pr) = pulls.into_iter().next() else {
    return Ok(None);
  };

  let reviews = if fine_grained && is_awaiting_review(&pr) {
    client
      .get_pull_request_reviews(&repo.owner, &repo.name, pr.number)
      .await?
  } else {
    Vec::new()
  };

  let state = review_state(&pr, &reviews);
  Ok(Some((pr.html_url, state)))
}

fn is_awaiting_review(pr: &GitHubPullRequest) -> bool {
  pr.state == "open" && !pr.is_draft()
}

/// Review state of `pr` given its reviews, oldest first.
///
/// Only the latest review of each reviewer counts. Without reviews an open
/// pull request is waiting.
pub fn review_state(pr: &GitHubPullRequest, reviews: &[GitHubReview]) -> ReviewState {
  if pr.is_merged() {
    return ReviewState::Committed;
  }
  if pr.state == "closed" {
    return ReviewState::Closed;
  }
  if pr.is_draft() {
    return ReviewState::Unsent;
  }

  let mut latest: HashMap<&str, &str> = HashMap::new();
  for review in reviews {
    if matches!(review.state.as_str(), "PENDING" | "DISMISSED") {
      continue;
    }
    let reviewer = review.user.as_ref().map_or("", |user| user.login.as_str());
    latest.insert(reviewer, review.state.as_str());
  }

  if latest.values().any(|state| *state == "CHANGES_REQUESTED") {
    ReviewState::Reply
  } else if latest.values().any(|state| *state == "APPROVED") {
    ReviewState::Approved
  } else if latest.values().any(|state| *state == "COMMENTED") {
    ReviewState::Reply
  } else {
    ReviewState::Waiting
  }
}
