//! Column-aligned text output.
//!
//! Rows are collected first so every column can be padded to the widest
//! value it holds. A column that is empty in every row takes no space at all,
//! separator included.

use console::measure_text_width;
use owo_colors::{AnsiColors, OwoColorize, Style};

use crate::error::{ArborError, Result};

/// Separator placed after a cell unless the cell asks for another one.
pub const DEFAULT_SEPARATOR: &str = "    ";

/// Color and weight applied to a cell's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paint {
  /// Foreground color; `None` keeps the terminal default.
  pub color: Option<AnsiColors>,
  /// Render in the bright/bold weight.
  pub bright: bool,
}

impl Paint {
  /// No color and normal weight.
  pub const fn plain() -> Self {
    Self {
      color: None,
      bright: false,
    }
  }

  /// Foreground `color` in the normal weight.
  pub const fn color(color: AnsiColors) -> Self {
    Self {
      color: Some(color),
      bright: false,
    }
  }

  /// Same paint with the given weight.
  pub const fn with_bright(mut self, bright: bool) -> Self {
    self.bright = bright;
    self
  }

  fn to_style(self) -> Option<Style> {
    if self.color.is_none() && !self.bright {
      return None;
    }

    let mut style = Style::new();
    if let Some(color) = self.color {
      style = style.color(color);
    }
    if self.bright {
      style = style.bold();
    }
    Some(style)
  }
}

/// One cell of an [`OutputRow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
  /// Visible text.
  pub text: String,
  /// Appended after the padded text.
  pub separator: String,
  /// Color and weight of the text.
  pub paint: Paint,
}

impl Cell {
  /// A cell followed by [`DEFAULT_SEPARATOR`].
  pub fn new(text: impl Into<String>, paint: Paint) -> Self {
    Self {
      text: text.into(),
      separator: DEFAULT_SEPARATOR.to_string(),
      paint,
    }
  }

  /// Replace the separator.
  pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
    self.separator = separator.into();
    self
  }
}

/// Ordered cells making up one output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
  cells: Vec<Cell>,
}

impl OutputRow {
  /// Create an empty row.
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a cell.
  pub fn push(&mut self, cell: Cell) {
    self.cells.push(cell);
  }

  /// Builder-style variant of [`OutputRow::push`].
  pub fn with(mut self, cell: Cell) -> Self {
    self.push(cell);
    self
  }

  /// Borrow the cells.
  pub fn cells(&self) -> &[Cell] {
    &self.cells
  }

  /// Number of cells.
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  /// Returns `true` when the row has no cells.
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }
}

/// Accumulates rows and renders them as aligned columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnFormatter {
  rows: Vec<OutputRow>,
  widths: Vec<usize>,
  no_color: bool,
}

impl ColumnFormatter {
  /// Create a formatter; `no_color` suppresses every escape sequence.
  pub fn new(no_color: bool) -> Self {
    Self {
      no_color,
      ..Self::default()
    }
  }

  /// Add a row. The first row fixes the column count for the table.
  pub fn append(&mut self, row: OutputRow) -> Result<()> {
    if self.rows.is_empty() {
      self.widths = vec![0; row.len()];
    } else if row.len() != self.widths.len() {
      return Err(ArborError::ColumnCountMismatch {
        expected: self.widths.len(),
        found: row.len(),
      });
    }

    for (width, cell) in self.widths.iter_mut().zip(row.cells()) {
      *width = (*width).max(measure_text_width(&cell.text));
    }
    self.rows.push(row);
    Ok(())
  }

  /// Add every row from `rows`, stopping at the first mismatch.
  pub fn extend<I: IntoIterator<Item = OutputRow>>(&mut self, rows: I) -> Result<()> {
    for row in rows {
      self.append(row)?;
    }
    Ok(())
  }

  /// Render every row, one line each, without a trailing newline.
  pub fn render(&self) -> String {
    self
      .rows
      .iter()
      .map(|row| self.render_row(row))
      .collect::<Vec<_>>()
      .join("\n")
  }

  fn render_row(&self, row: &OutputRow) -> String {
    let mut line = String::new();
    for (cell, width) in row.cells().iter().zip(&self.widths) {
      if *width == 0 {
        continue;
      }

      line.push_str(&self.paint(cell));
      let padding = width.saturating_sub(measure_text_width(&cell.text));
      line.push_str(&" ".repeat(padding));
      line.push_str(&cell.separator);
    }
    line.trim_end().to_string()
  }

  fn paint(&self, cell: &Cell) -> String {
    if self.no_color || cell.text.is_empty() {
      return cell.text.clone();
    }

    match cell.paint.to_style() {
      Some(style) => cell.text.style(style).to_string(),
      None => cell.text.clone(),
    }
  }
}
