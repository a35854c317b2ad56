//! Fixed-width column layout for text output.
//!
//! Columns are at least [`COLUMN_WIDTH`] cells wide and separated by one
//! space. A value too wide for its column is never truncated: it ends the
//! physical line, and the following columns continue on a new line indented
//! by blank columns up to and including the wide one.
use unicode_width::UnicodeWidthStr;

use super::palette::{Palette, Role};

/// Minimum column width in terminal cells.
pub const COLUMN_WIDTH: usize = 15;

/// One column value: display text (possibly painted) plus the width of its
/// visible characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    /// Unstyled cell.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            width: text.width(),
        }
    }

    /// Cell painted for `role`; the width is taken from the unpainted text.
    pub fn painted(palette: Palette, role: Role, text: &str) -> Self {
        Self {
            text: palette.paint(role, text),
            width: text.width(),
        }
    }

    /// Empty column.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            width: 0,
        }
    }

    /// Visible width in terminal cells.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Lays out one logical row as one or more physical lines.
///
/// Trailing padding is trimmed; a final line made only of blank columns is
/// dropped.
pub fn format_line(cells: &[Cell]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut parts: Vec<String> = Vec::with_capacity(cells.len());
    for (i, cell) in cells.iter().enumerate() {
        let pad = COLUMN_WIDTH.saturating_sub(cell.width);
        parts.push(format!("{}{}", cell.text, " ".repeat(pad)));
        if cell.width > COLUMN_WIDTH {
            lines.push(parts.join(" ").trim_end().to_owned());
            parts = vec![" ".repeat(COLUMN_WIDTH); i + 1];
        }
    }
    let last = parts.join(" ");
    if !last.trim().is_empty() {
        lines.push(last.trim_end().to_owned());
    }
    lines
}
