//! One-shot mode: interpret a single command and exit.

use crate::app::perform_effect;
use std::io::{self, IsTerminal, Write};
use termfolio::config::Config;
use termfolio::error::TermfolioError;
use termfolio::opener::ResourceOpener;
use termfolio::shell::Interpretation;
use termfolio::tui::Renderer;

/// Exit status for names outside the command table, as shells use.
pub(crate) const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Interpret `command`, print the result, and return the exit status.
///
/// With `json`, the interpretation is printed as JSON and no effect runs.
pub(crate) fn run_exec_mode(
    renderer: &Renderer,
    config: &Config,
    command: &str,
    json: bool,
    opener: &dyn ResourceOpener,
) -> Result<i32, TermfolioError> {
    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut out = stdout.lock();
    let code = exec_to(&mut out, renderer, config, command, json, clear_screen, opener)?;
    out.flush()?;
    Ok(code)
}

/// Blank input is filtered before interpretation: nothing is printed and
/// the status is 0.
fn exec_to<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    config: &Config,
    command: &str,
    json: bool,
    clear_screen: bool,
    opener: &dyn ResourceOpener,
) -> Result<i32, TermfolioError> {
    let command = command.trim();
    if command.is_empty() {
        return Ok(0);
    }
    let interpretation = config.interpreter().interpret(command);
    write_exec_output(out, renderer, config, &interpretation, json, clear_screen)?;
    if !json {
        perform_effect(&interpretation, opener);
    }
    Ok(exit_status(&interpretation))
}

fn write_exec_output<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    config: &Config,
    interpretation: &Interpretation,
    json: bool,
    clear_screen: bool,
) -> Result<(), TermfolioError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, interpretation)?;
        writeln!(out)?;
        return Ok(());
    }
    renderer.write_interpretation(
        out,
        interpretation,
        &config.sections,
        termfolio::tui::terminal_columns(),
        clear_screen,
    )?;
    Ok(())
}

fn exit_status(interpretation: &Interpretation) -> i32 {
    if interpretation.recognized {
        0
    } else {
        EXIT_COMMAND_NOT_FOUND
    }
}
