//! # Command Line Interface
//!
//! Flags accepted by `arbor`.

use std::path::PathBuf;

use arbor_core::ColorMode;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};

/// Top-level CLI command for arbor
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Print a tree of all branches parented by their upstreams")]
#[command(
  long_about = "Print a tree of all local branches, each parented by the upstream it tracks.\n\n\
        Remote branches, tags and missing upstreams become the roots of the tree.\n\
        Add -v flags to show tracking status, commit hashes and pull request status."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// Show more columns (can be used multiple times)
  #[arg(
    short = 'v',
    action = ArgAction::Count,
    long_help = "Show more columns for every branch.\n\n\
             -v: ahead/behind counts relative to the upstream\n\
             -vv: commit hash and pull request URL\n\
             -vvv: pull request review state from the individual reviews"
  )]
  pub verbosity: u8,

  /// Turn off colors
  #[arg(long = "no-color")]
  pub no_color: bool,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// The number of jobs to use when retrieving review status
  #[arg(short = 'j', long = "maxjobs", value_name = "N")]
  pub max_jobs: Option<usize>,

  /// Show the commit subject
  #[arg(long = "show-subject")]
  pub show_subject: bool,

  /// Run as if arbor was started in PATH
  #[arg(short = 'C', long = "repo", value_name = "PATH")]
  pub repo: Option<PathBuf>,
}

impl Cli {
  /// Whether the report should be printed without color.
  pub fn no_color(&self) -> bool {
    self.no_color || !self.colors.use_color()
  }
}
