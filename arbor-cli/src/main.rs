//! # Arbor CLI Entry Point
//!
//! Prints the local branches of the current repository as a tree, each
//! branch parented by the upstream it tracks.

use std::process::ExitCode;

use arbor_cli::{Cli, init_tracing, run};
use arbor_core::print_error;
use clap::Parser;

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing();

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{err:#}"), cli.no_color());
      ExitCode::FAILURE
    }
  }
}
