//! # Configuration
//!
//! Locates the arbor configuration file and loads the display settings that
//! are not exposed as command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::presentation::Namespaces;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ARBOR_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directories for arbor
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Resolve the platform config directory
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("dev", "", "arbor").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Path of the config file, honoring [`CONFIG_ENV_VAR`]
  pub fn config_path(&self) -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
      Some(path) if !path.is_empty() => PathBuf::from(path),
      _ => self.config_dir.join(CONFIG_FILE_NAME),
    }
  }

  /// Load the config file, or defaults when it does not exist
  pub fn load_config(&self) -> Result<ArborConfig> {
    ArborConfig::load_from_path(self.config_path())
  }
}

/// User settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
  /// Prefixes that mark remote-tracking branches. Derived from the
  /// repository's remotes when unset.
  pub remote_prefixes: Option<Vec<String>>,
  /// Prefixes that mark release branches.
  pub release_prefixes: Vec<String>,
  /// Upper bound on parallel review lookups.
  pub max_jobs: Option<usize>,
  /// Remote whose URL identifies the GitHub repository.
  pub github_remote: String,
}

impl Default for ArborConfig {
  fn default() -> Self {
    Self {
      remote_prefixes: None,
      release_prefixes: vec!["branch-heads/".to_string()],
      max_jobs: None,
      github_remote: "origin".to_string(),
    }
  }
}

impl ArborConfig {
  /// Load configuration from `path`; a missing file yields the defaults.
  pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!(path = %path.display(), "no config file, using defaults");
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Self =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;
    Ok(config)
  }

  /// Name namespaces for a repository with the given remotes.
  pub fn namespaces<S: AsRef<str>>(&self, remotes: &[S]) -> Namespaces {
    match &self.remote_prefixes {
      Some(prefixes) => Namespaces {
        remote_prefixes: prefixes.clone(),
        release_prefixes: self.release_prefixes.clone(),
      },
      None => Namespaces::for_remotes(remotes, self.release_prefixes.clone()),
    }
  }

  /// Parallel lookup limit, defaulting to the available parallelism.
  pub fn max_jobs(&self) -> usize {
    self
      .max_jobs
      .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, usize::from))
      .max(1)
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ArborConfig::load_from_path(dir.path().join("config.toml")).unwrap();
    assert_eq!(config, ArborConfig::default());
    assert_eq!(config.github_remote, "origin");
  }

  #[test]
  fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "max_jobs = 3\nremote_prefixes = [\"upstream/\"]\n").unwrap();

    let config = ArborConfig::load_from_path(&path).unwrap();

    assert_eq!(config.max_jobs(), 3);
    assert_eq!(config.release_prefixes, vec!["branch-heads/".to_string()]);
    let namespaces = config.namespaces(&["origin"]);
    assert!(namespaces.is_remote("upstream/main"));
    assert!(!namespaces.is_remote("origin/main"));
  }

  #[test]
  fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "max_jobs = \"many\"").unwrap();

    let err = ArborConfig::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
  }

  #[test]
  fn remotes_seed_namespaces_when_unset() {
    let config = ArborConfig::default();
    let namespaces = config.namespaces(&["origin", "fork"]);
    assert!(namespaces.is_remote("fork/topic"));
    assert!(namespaces.is_release("branch-heads/1"));
    assert!(config.max_jobs() >= 1);
  }
}
