//! Prompt rendering helpers for the line editor.

use crate::tui::settings;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Visible primary prompt string, used for layout math.
pub fn primary_prompt_text() -> &'static str {
    settings::PROMPT_PRIMARY
}

/// Queue the primary prompt with color/styling.
pub(crate) fn write_primary_prompt<W>(out: &mut W, color: bool) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if color {
        out.queue(PrintStyledContent(
            settings::PROMPT_SYMBOL
                .with(settings::COLOR_PROMPT_SYMBOL)
                .bold(),
        ))?;
        out.queue(Print(settings::PROMPT_SPACER))?;
    } else {
        out.queue(Print(primary_prompt_text()))?;
    }
    Ok(())
}

/// Queue the typed input after the prompt.
pub(crate) fn write_input<W>(out: &mut W, color: bool, buffer: &str) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if color {
        out.queue(PrintStyledContent(buffer.with(settings::COLOR_INPUT)))?;
    } else {
        out.queue(Print(buffer))?;
    }
    Ok(())
}
