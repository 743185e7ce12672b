//! Tracing subscriber setup.

use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install a subscriber that writes to stderr, filtered by `RUST_LOG`.
///
/// `-v` controls how much of the branch map is shown, not log verbosity, so
/// logging is only configured through the environment.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  debug!("Tracing initialized");
}
