//! # Arbor CLI
//!
//! Argument parsing, tracing setup and the wiring of git and GitHub sources
//! into the branch map renderer.

mod cli;
mod logging;
mod map;

pub use cli::Cli;
pub use logging::init_tracing;
pub use map::run;
