//! # GitHub Pull Request Endpoints
//!
//! Pull request lookups by head branch and the reviews left on them.

use anyhow::Result;

use crate::client::GitHubClient;
use crate::models::{GitHubPullRequest, GitHubReview};

impl GitHubClient {
  /// Find pull requests, open or closed, whose head is `owner:head_branch`.
  ///
  /// GitHub lists the newest pull request first.
  pub async fn find_pull_requests_by_head_branch(
    &self,
    owner: &str,
    repo: &str,
    head_branch: &str,
  ) -> Result<Vec<GitHubPullRequest>> {
    let head_param = format!("{owner}:{head_branch}");
    self
      .get_json(
        &format!("/repos/{owner}/{repo}/pulls"),
        &[("head", head_param.as_str()), ("state", "all")],
        "pull requests by head branch",
      )
      .await
  }

  /// Get pull request reviews, oldest first
  pub async fn get_pull_request_reviews(&self, owner: &str, repo: &str, pr_number: u32) -> Result<Vec<GitHubReview>> {
    self
      .get_json(
        &format!("/repos/{owner}/{repo}/pulls/{pr_number}/reviews"),
        &[],
        "pull request reviews",
      )
      .await
  }
}
