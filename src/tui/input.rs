//! Interactive prompt input with history recall and command autocomplete.
//!
//! The editor owns terminal editing mechanics only. History state lives in
//! [`History`]; the editor calls into it for Up/Down recall and leaves
//! recording submissions to the caller.

use crate::shell::{matching_commands, Command, History};
use crate::tui::input_buffer::LineBuffer;
use crate::tui::input_layout::{
    compute_input_layout, suggestion_rows, suggestion_text, terminal_columns,
};
use crate::tui::prompt::{primary_prompt_text, write_input, write_primary_prompt};
use crate::tui::settings;
use crate::tui::text::ellipsize;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Result of reading one prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// User submitted a line (possibly blank).
    Line(String),
    /// End-of-file (`Ctrl-D` on empty buffer / stdin EOF).
    Eof,
    /// User abandoned the current line (`Ctrl-C`).
    Cancelled,
}

/// Read one command line from the terminal.
///
/// Falls back to plain buffered reading when stdin or stderr is not a TTY.
pub fn read_command_line(color: bool, history: &mut History) -> io::Result<ReadOutcome> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        let stdin = io::stdin();
        return read_line_fallback(color, &mut stdin.lock(), &mut io::stderr());
    }
    read_line_interactive(color, history)
}

/// Non-TTY path: print the prompt and block on one buffered line.
fn read_line_fallback<R, W>(color: bool, input: &mut R, prompt_out: &mut W) -> io::Result<ReadOutcome>
where
    R: BufRead,
    W: Write,
{
    write_primary_prompt(prompt_out, color)?;
    prompt_out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(prompt_out)?;
        return Ok(ReadOutcome::Eof);
    }
    Ok(ReadOutcome::Line(
        line.trim_end_matches(['\n', '\r']).to_string(),
    ))
}

/// What the editor should do after one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Submit,
    Eof,
    Cancel,
}

/// Apply one key press to the editor state.
fn handle_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    line: &mut LineBuffer,
    history: &mut History,
) -> KeyAction {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Enter => return KeyAction::Submit,
        KeyCode::Char('d') if ctrl => {
            // Ctrl-D exits only when no text is present.
            if line.text.is_empty() {
                return KeyAction::Eof;
            }
        }
        KeyCode::Char('c') if ctrl => return KeyAction::Cancel,
        KeyCode::Up => recall(line, history.recall_previous()),
        KeyCode::Char('p') if ctrl => recall(line, history.recall_previous()),
        KeyCode::Down => recall(line, history.recall_next()),
        KeyCode::Char('n') if ctrl => recall(line, history.recall_next()),
        KeyCode::Tab => {
            if let Some(choice) = matching_commands(&line.text).first() {
                line.replace(choice.name());
            }
        }
        KeyCode::Left => line.move_left(),
        KeyCode::Char('b') if ctrl => line.move_left(),
        KeyCode::Right => line.move_right(),
        KeyCode::Char('f') if ctrl => line.move_right(),
        KeyCode::Home => line.move_home(),
        KeyCode::Char('a') if ctrl => line.move_home(),
        KeyCode::End => line.move_end(),
        KeyCode::Char('e') if ctrl => line.move_end(),
        KeyCode::Backspace => line.backspace(),
        KeyCode::Delete => line.delete(),
        KeyCode::Char('k') if ctrl => line.kill_to_end(),
        KeyCode::Char('u') if ctrl => line.kill_to_start(),
        KeyCode::Char('w') if ctrl => line.kill_word_back(),
        KeyCode::Char(ch) => {
            // Ignore control/alt-modified printable keys.
            if !ctrl && !modifiers.contains(KeyModifiers::ALT) {
                line.insert(ch);
            }
        }
        _ => {}
    }
    KeyAction::Continue
}

/// Replace the buffer with a recalled entry; `None` keeps current input.
fn recall(line: &mut LineBuffer, entry: Option<&str>) {
    if let Some(entry) = entry {
        line.replace(entry);
    }
}

fn read_line_interactive(color: bool, history: &mut History) -> io::Result<ReadOutcome> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut line = LineBuffer::default();
    let mut previous_cursor_row = 0usize;
    let mut last_frame: Option<LineBuffer> = None;

    loop {
        if last_frame.as_ref() != Some(&line) {
            // Skip full repaint when nothing visual changed.
            previous_cursor_row = render_editor(&mut stderr, color, &line, previous_cursor_row)?;
            last_frame = Some(line.clone());
        }

        if !event::poll(Duration::from_millis(settings::REPL_EVENT_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match handle_key(key.code, key.modifiers, &mut line, history) {
            KeyAction::Continue => {}
            KeyAction::Submit => {
                finalize_editor(&mut stderr, color, &line.text, previous_cursor_row)?;
                return Ok(ReadOutcome::Line(line.text));
            }
            KeyAction::Eof => {
                finalize_editor(&mut stderr, color, "", previous_cursor_row)?;
                return Ok(ReadOutcome::Eof);
            }
            KeyAction::Cancel => {
                finalize_editor(&mut stderr, color, "", previous_cursor_row)?;
                return Ok(ReadOutcome::Cancelled);
            }
        }
    }
}

/// Render prompt, buffer, and suggestions; return the cursor row.
fn render_editor<W>(
    out: &mut W,
    color: bool,
    line: &LineBuffer,
    previous_cursor_row: usize,
) -> io::Result<usize>
where
    W: Write + QueueableCommand,
{
    if previous_cursor_row > 0 {
        out.queue(MoveUp(previous_cursor_row as u16))?;
    }
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;

    write_primary_prompt(out, color)?;
    write_input(out, color, &line.text)?;

    let cols = terminal_columns();
    let matches = matching_commands(&line.text);
    for cmd in &matches {
        out.queue(Print("\r\n"))?;
        write_suggestion(out, color, *cmd, cols)?;
    }

    let layout = compute_input_layout(&line.text, line.cursor, cols, primary_prompt_text());
    let bottom_row = layout
        .total_rows
        .saturating_sub(1)
        .saturating_add(suggestion_rows(&matches, color, cols));
    let lines_to_move_up = bottom_row.saturating_sub(layout.cursor_row);
    if lines_to_move_up > 0 {
        out.queue(MoveUp(lines_to_move_up as u16))?;
    }
    out.queue(MoveToColumn(layout.cursor_col as u16))?;
    out.flush()?;

    Ok(layout.cursor_row)
}

fn write_suggestion<W>(out: &mut W, color: bool, cmd: Command, cols: usize) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if !color {
        out.queue(Print(suggestion_text(cmd, false)))?;
        return Ok(());
    }
    let used = settings::AUTOCOMPLETE_PREFIX.len() + cmd.name().len() + 3;
    out.queue(Print(settings::AUTOCOMPLETE_PREFIX))?;
    out.queue(PrintStyledContent(
        settings::suggestion_marker(true).with(settings::COLOR_AUTOCOMPLETE_MARKER),
    ))?;
    out.queue(Print(" "))?;
    out.queue(PrintStyledContent(
        cmd.name().with(settings::COLOR_AUTOCOMPLETE_COMMAND).bold(),
    ))?;
    out.queue(Print(" "))?;
    out.queue(PrintStyledContent(
        ellipsize(cmd.description(), cols.saturating_sub(used).max(1))
            .with(settings::COLOR_AUTOCOMPLETE_DESCRIPTION),
    ))?;
    Ok(())
}

/// Redraw a clean final frame and append a newline before returning.
fn finalize_editor<W>(
    out: &mut W,
    color: bool,
    buffer: &str,
    previous_cursor_row: usize,
) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if previous_cursor_row > 0 {
        out.queue(MoveUp(previous_cursor_row as u16))?;
    }
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;
    write_primary_prompt(out, color)?;
    write_input(out, color, buffer)?;
    out.queue(Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
