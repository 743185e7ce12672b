//! Error type shared by the arbor library crates.

use anyhow::Error as AnyError;
use thiserror::Error;

/// Errors produced while collecting branch metadata or rendering the map.
#[derive(Debug, Error)]
pub enum ArborError {
  /// The working directory is not inside a git repository.
  #[error("not inside a git repository: {0}")]
  NotARepository(String),
  /// A row was appended with a different number of cells than the rows
  /// before it. This is a bug in row construction, never a user error.
  #[error("output row has {found} columns but the table was started with {expected}")]
  ColumnCountMismatch {
    /// Column count fixed by the first row.
    expected: usize,
    /// Column count of the offending row.
    found: usize,
  },
  /// Wrapper for lower-level errors originating from `git2`.
  #[error(transparent)]
  Git(#[from] git2::Error),
  /// Wrapper for other error types.
  #[error(transparent)]
  Other(#[from] AnyError),
}

/// Convenience alias used across the core crate.
pub type Result<T, E = ArborError> = std::result::Result<T, E>;
