//! # GitHub HTTP Client
//!
//! Authenticated requests against the GitHub REST API and the shared
//! response handling used by every endpoint.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client
  pub fn new(auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      auth,
    }
  }

  /// Point the client at another API root, such as GitHub Enterprise.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// GET `path` relative to the API root and decode the JSON body.
  ///
  /// `what` names the resource in error messages.
  pub(crate) async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, &str)],
    what: &str,
  ) -> Result<T> {
    let url = format!("{}{path}", self.base_url);

    let response = self
      .client
      .get(&url)
      .query(query)
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT)
      .basic_auth(&self.auth.username, Some(&self.auth.token))
      .send()
      .await
      .with_context(|| format!("Failed to fetch {what}"))?;

    match response.status() {
      StatusCode::OK => {
        let body = response.text().await.context("Failed to read response body")?;

        serde_json::from_str::<T>(&body).map_err(|err| {
          match serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
          {
            Some(message) => anyhow!("Failed to parse {what}: GitHub API error: {message}"),
            None => anyhow!("Failed to parse {what}: {err}"),
          }
        })
      }
      StatusCode::NOT_FOUND => Err(anyhow!("GitHub returned 404 for {what}")),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow!(
        "Authentication failed. Please check your GitHub credentials."
      )),
      status => Err(anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

/// Create a GitHub client from credentials
pub fn create_github_client(username: &str, token: &str) -> GitHubClient {
  GitHubClient::new(GitHubAuth {
    username: username.to_string(),
    token: token.to_string(),
  })
}
