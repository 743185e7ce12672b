//! # Output Helpers
//!
//! Color-mode selection and the styled diagnostics printed alongside the
//! branch map. Diagnostics go to stderr so stdout only carries the report.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  #[default]
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Whether stdout output should carry color escapes.
  ///
  /// `Auto` defers to the terminal detection in `console`, which honors
  /// `NO_COLOR` and `CLICOLOR_FORCE`.
  pub fn use_color(self) -> bool {
    match self {
      ColorMode::Yes | ColorMode::Always => true,
      ColorMode::No | ColorMode::Never => false,
      ColorMode::Auto => console::colors_enabled(),
    }
  }
}

/// Print an error message to stderr. The marker is only colored when
/// `no_color` is unset and stderr supports color.
pub fn print_error(message: &str, no_color: bool) {
  eprintln!("{}", error_line(message, no_color));
}

fn error_line(message: &str, no_color: bool) -> String {
  if no_color {
    return format!("✗ {message}");
  }
  let marker = "✗".if_supports_color(Stream::Stderr, |text| text.style(Style::new().red().bold()));
  format!("{marker} {message}")
}
