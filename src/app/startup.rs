//! Startup banner shown before the interactive session begins.

use std::io::{self, Write};
use termfolio::config::Config;
use termfolio::tui::Renderer;

/// Headline echoed by the banner, when the banner is enabled.
pub(crate) fn startup_headline(config: &Config) -> Option<&str> {
    if !config.display.banner {
        return None;
    }
    config
        .portfolio
        .headlines
        .first()
        .map(String::as_str)
        .filter(|headline| !headline.trim().is_empty())
}

/// Write the banner line plus a blank separator row.
pub(crate) fn write_startup_banner<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    config: &Config,
) -> io::Result<()> {
    let Some(headline) = startup_headline(config) else {
        return Ok(());
    };
    renderer.write_banner(out, headline)?;
    writeln!(out)
}
