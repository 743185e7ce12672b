//! Owner and repository name extraction from git remote URLs.

use std::fmt;
use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

static GITHUB_REPO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?/?$").expect("Failed to compile GitHub repo regex")
});

/// A repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
  pub owner: String,
  pub name: String,
}

impl GitHubRepo {
  /// Parse a remote URL such as `https://github.com/owner/repo.git`,
  /// `ssh://git@github.com/owner/repo` or `git@github.com:owner/repo.git`.
  pub fn parse(url: &str) -> Result<Self> {
    let captures = GITHUB_REPO_REGEX
      .captures(url.trim())
      .ok_or_else(|| anyhow!("Could not extract owner and repo from URL: {url}"))?;

    Ok(Self {
      owner: captures[1].to_string(),
      name: captures[2].to_string(),
    })
  }
}

impl fmt::Display for GitHubRepo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}
