//! The branch map command.

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use arbor_core::{
  ArborConfig, BranchMetadataSource, ConfigDirs, GitBranchSource, NoReviewStatus, PresentationOptions,
  ReviewStatusSource, render_branch_map,
};
use arbor_gh::{GitHubRepo, GitHubReviewSource, create_github_client, load_credentials};
use tracing::{debug, warn};

use crate::cli::Cli;

/// Verbosity at which review status is shown.
const REVIEW_VERBOSITY: u8 = 2;

/// Render the branch map for the repository selected by `cli` to stdout.
pub fn run(cli: &Cli) -> Result<()> {
  let start = match &cli.repo {
    Some(path) => path.clone(),
    None => env::current_dir().context("Failed to determine the current directory")?,
  };
  let source = GitBranchSource::discover(&start)
    .with_context(|| format!("Failed to open a git repository at {}", start.display()))?;

  let config = ConfigDirs::new()?
    .load_config()
    .context("Failed to load the arbor configuration")?;
  let remotes = source.remote_names();
  let options = PresentationOptions {
    verbosity: cli.verbosity,
    show_subject: cli.show_subject,
    namespaces: config.namespaces(remotes.as_slice()),
  };
  let max_jobs = cli.max_jobs.unwrap_or_else(|| config.max_jobs()).max(1);

  let reviews = review_source(&source, &config, cli.verbosity);
  let report = render_branch_map(&source, reviews.as_ref(), &options, max_jobs, cli.no_color())
    .context("Failed to render the branch map")?;

  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{report}").context("Failed to write the branch map")?;
  Ok(())
}

/// GitHub-backed review status when it is needed and available, otherwise a
/// source that knows nothing.
fn review_source(source: &GitBranchSource, config: &ArborConfig, verbosity: u8) -> Box<dyn ReviewStatusSource> {
  if verbosity < REVIEW_VERBOSITY {
    return Box::new(NoReviewStatus);
  }

  match github_review_source(source, config) {
    Ok(Some(github)) => Box::new(github),
    Ok(None) => Box::new(NoReviewStatus),
    Err(err) => {
      warn!(error = %err, "GitHub review status unavailable");
      Box::new(NoReviewStatus)
    }
  }
}

fn github_review_source(source: &GitBranchSource, config: &ArborConfig) -> Result<Option<GitHubReviewSource>> {
  let Some(url) = source.remote_url(&config.github_remote) else {
    debug!(remote = %config.github_remote, "remote not configured, skipping review status");
    return Ok(None);
  };
  let repo = match GitHubRepo::parse(&url) {
    Ok(repo) => repo,
    Err(err) => {
      debug!(url = %url, error = %err, "remote is not hosted on GitHub");
      return Ok(None);
    }
  };
  let Some(creds) = load_credentials()? else {
    warn!("no GitHub credentials found; set GITHUB_TOKEN or add github.com to ~/.netrc");
    return Ok(None);
  };

  let client = create_github_client(&creds.username, &creds.password);
  Ok(Some(GitHubReviewSource::new(client, repo)?))
}
