//! GitHub API payloads, trimmed to the fields review lookups need.

use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub username: String,
  pub token: String,
}

/// Represents a GitHub user
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
}

/// Represents a GitHub pull request
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPullRequest {
  pub number: u32,
  pub title: String,
  pub html_url: String,
  /// `open` or `closed`.
  pub state: String,
  #[serde(default)]
  pub draft: Option<bool>,
  #[serde(default)]
  pub merged_at: Option<String>,
  pub head: GitHubPullRequestRef,
}

impl GitHubPullRequest {
  pub fn is_merged(&self) -> bool {
    self.merged_at.is_some()
  }

  pub fn is_draft(&self) -> bool {
    self.draft.unwrap_or(false)
  }
}

/// Head or base of a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPullRequestRef {
  pub label: String,
  #[serde(rename = "ref")]
  pub ref_name: String,
  pub sha: String,
}

/// Represents a GitHub pull request review
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubReview {
  pub id: u64,
  /// Absent for reviews left by deleted accounts.
  #[serde(default)]
  pub user: Option<GitHubUser>,
  /// `APPROVED`, `CHANGES_REQUESTED`, `COMMENTED`, `DISMISSED` or `PENDING`.
  pub state: String,
  #[serde(default)]
  pub submitted_at: Option<String>,
}
