//! Terminal row/column layout helpers for the interactive editor.

use crate::shell::Command;
use crate::tui::settings;
use crossterm::terminal;

/// Computed layout for prompt + input buffer on the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InputLayout {
    /// Total terminal rows consumed by prompt + buffer.
    pub(crate) total_rows: usize,
    /// Row index where the cursor should be placed.
    pub(crate) cursor_row: usize,
    /// Column index where the cursor should be placed.
    pub(crate) cursor_col: usize,
}

/// Read terminal width or fall back to a fixed column count.
pub fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(settings::FALLBACK_COLUMNS)
}

/// Compute terminal layout for prompt + input and the cursor position.
pub(crate) fn compute_input_layout(
    buffer: &str,
    cursor: usize,
    cols: usize,
    primary_prompt: &str,
) -> InputLayout {
    let mut pos = CellPos::default();
    for _ in primary_prompt.chars() {
        pos.advance(cols);
    }

    let mut cursor_pos = None;
    for (idx, _) in buffer.chars().enumerate() {
        if idx == cursor {
            cursor_pos = Some(pos);
        }
        pos.advance(cols);
    }

    let cursor_pos = cursor_pos.unwrap_or(pos);
    InputLayout {
        total_rows: pos.row + 1,
        cursor_row: cursor_pos.row,
        cursor_col: cursor_pos.col,
    }
}

/// Rows consumed by autocomplete suggestions printed below the prompt.
pub(crate) fn suggestion_rows(matches: &[Command], color: bool, cols: usize) -> usize {
    matches
        .iter()
        .map(|cmd| {
            let mut pos = CellPos::default();
            for _ in suggestion_text(*cmd, color).chars() {
                pos.advance(cols);
            }
            // Each suggestion starts on a fresh row.
            pos.row + 1
        })
        .sum()
}

/// Unstyled suggestion line, used for both plain rendering and layout.
pub(crate) fn suggestion_text(cmd: Command, color: bool) -> String {
    format!(
        "{}{} {} {}",
        settings::AUTOCOMPLETE_PREFIX,
        settings::suggestion_marker(color),
        cmd.name(),
        cmd.description()
    )
}

#[derive(Debug, Clone, Copy, Default)]
struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    /// Advance by one printable cell, wrapping to the next row when needed.
    fn advance(&mut self, cols: usize) {
        if cols == 0 {
            return;
        }
        if self.col + 1 >= cols {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }
}
