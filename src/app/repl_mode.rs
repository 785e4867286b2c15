//! Interactive mode: startup help, then a read/interpret/render loop.

use crate::app::perform_effect;
use crate::app::startup::write_startup_banner;
use std::io::{self, IsTerminal, Write};
use termfolio::config::Config;
use termfolio::error::TermfolioError;
use termfolio::opener::ResourceOpener;
use termfolio::shell::{SectionCatalog, Session};
use termfolio::tui::{read_command_line, terminal_columns, ReadOutcome, Renderer};
use tracing::debug;

/// Run the interactive session until EOF.
pub(crate) fn run_repl_mode(
    renderer: &Renderer,
    config: &Config,
    opener: &dyn ResourceOpener,
) -> Result<i32, TermfolioError> {
    let stdout = io::stdout();
    let surface = Surface {
        clear_screen: stdout.is_terminal(),
        cols: terminal_columns(),
    };

    let (mut session, startup) = Session::start(config.interpreter());
    {
        let mut out = stdout.lock();
        write_startup_banner(&mut out, renderer, config)?;
        renderer.write_interpretation(
            &mut out,
            &startup,
            &config.sections,
            surface.cols,
            surface.clear_screen,
        )?;
        out.flush()?;
    }

    loop {
        match read_command_line(renderer.color(), session.history_mut())? {
            ReadOutcome::Eof => break,
            ReadOutcome::Cancelled => continue,
            ReadOutcome::Line(line) => {
                let mut out = stdout.lock();
                submit_line(
                    &mut out,
                    renderer,
                    &mut session,
                    &config.sections,
                    opener,
                    &line,
                    Surface {
                        cols: terminal_columns(),
                        ..surface
                    },
                )?;
                out.flush()?;
            }
        }
    }
    debug!(submitted = session.history().len(), "session ended");
    Ok(0)
}

/// Output surface facts sampled once per render.
#[derive(Debug, Clone, Copy)]
struct Surface {
    clear_screen: bool,
    cols: usize,
}

/// Submit one line to the session, render the result, and run its effect.
fn submit_line<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    session: &mut Session,
    sections: &SectionCatalog,
    opener: &dyn ResourceOpener,
    line: &str,
    surface: Surface,
) -> io::Result<()> {
    let Some(interpretation) = session.submit(line) else {
        return Ok(());
    };
    renderer.write_interpretation(
        out,
        &interpretation,
        sections,
        surface.cols,
        surface.clear_screen,
    )?;
    perform_effect(&interpretation, opener);
    Ok(())
}
