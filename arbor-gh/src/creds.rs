//! GitHub credential discovery.
//!
//! A `GITHUB_TOKEN` in the environment wins; otherwise the `github.com` (or
//! `api.github.com`) entry of `~/.netrc` is used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::debug;

/// Environment variable holding a GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
/// Environment variable holding the user the token belongs to.
pub const USER_ENV_VAR: &str = "GITHUB_USER";

const GITHUB_MACHINES: [&str; 2] = ["github.com", "api.github.com"];
const TOKEN_USERNAME: &str = "x-access-token";

/// Represents credentials for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Credentials for `target_machine` in `.netrc` content.
///
/// Both the single-line (`machine host login user password pass`) and the
/// multi-line layouts are accepted. An entry missing its login or password
/// yields `None`.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content.split_whitespace();
  let mut in_target = false;
  let mut username = None;
  let mut password = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if in_target {
          break;
        }
        in_target = tokens.next() == Some(target_machine);
      }
      "default" if in_target => break,
      "login" if in_target => username = tokens.next(),
      "password" if in_target => password = tokens.next(),
      _ => {}
    }
  }

  match (username, password) {
    (Some(username), Some(password)) => Some(Credentials {
      username: username.to_string(),
      password: password.to_string(),
    }),
    _ => None,
  }
}

/// Credentials from an explicit token, or from the `.netrc` under `home`.
pub fn find_credentials(
  token: Option<String>,
  user: Option<String>,
  home: Option<&Path>,
) -> Result<Option<Credentials>> {
  if let Some(token) = token.filter(|token| !token.is_empty()) {
    debug!("using GitHub token from the environment");
    return Ok(Some(Credentials {
      username: user.filter(|user| !user.is_empty()).unwrap_or_else(|| TOKEN_USERNAME.to_string()),
      password: token,
    }));
  }

  let Some(home) = home else {
    return Ok(None);
  };
  let path = netrc_path(home);
  if !path.exists() {
    debug!(path = %path.display(), "no .netrc file");
    return Ok(None);
  }

  let content = fs::read_to_string(&path).context("Failed to read .netrc file")?;
  Ok(GITHUB_MACHINES.iter().find_map(|machine| parse_netrc(&content, machine)))
}

/// Credentials from the process environment and the user's home directory.
pub fn load_credentials() -> Result<Option<Credentials>> {
  let base_dirs = BaseDirs::new();
  find_credentials(
    std::env::var(TOKEN_ENV_VAR).ok(),
    std::env::var(USER_ENV_VAR).ok(),
    base_dirs.as_ref().map(BaseDirs::home_dir),
  )
}
