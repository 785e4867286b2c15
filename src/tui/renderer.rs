//! Terminal output renderer for transcript, section, and status messages.
//!
//! Transcript and section output is written to a caller-supplied writer;
//! errors go to stderr so piped transcripts stay clean.

use crate::shell::{Interpretation, SectionCatalog, SectionContent, TranscriptUpdate};
use crate::tui::settings;
use crate::tui::text::wrap_to_width;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Print an error line to stderr.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }

    pub fn write_banner<W>(&self, out: &mut W, headline: &str) -> io::Result<()>
    where
        W: Write + QueueableCommand,
    {
        let text = format!("{}{headline}", crate::config::BANNER_PREFIX);
        if self.color {
            out.queue(PrintStyledContent(text.with(settings::COLOR_BANNER).bold()))?;
        } else {
            out.queue(Print(text))?;
        }
        out.queue(Print("\n"))?;
        Ok(())
    }

    /// Write transcript changes and the activated section, if any.
    pub fn write_interpretation<W>(
        &self,
        out: &mut W,
        interpretation: &Interpretation,
        sections: &SectionCatalog,
        cols: usize,
        clear_screen: bool,
    ) -> io::Result<()>
    where
        W: Write + QueueableCommand,
    {
        match &interpretation.transcript {
            TranscriptUpdate::Append(lines) => self.write_lines(out, lines)?,
            TranscriptUpdate::Reset => {
                if clear_screen {
                    out.queue(Clear(ClearType::All))?;
                    out.queue(MoveTo(0, 0))?;
                }
            }
        }
        if let Some(content) = sections.get(interpretation.section) {
            self.write_section(out, content, cols)?;
        }
        Ok(())
    }

    /// Write transcript lines in order.
    pub fn write_lines<W>(&self, out: &mut W, lines: &[String]) -> io::Result<()>
    where
        W: Write + QueueableCommand,
    {
        for line in lines {
            if self.color {
                out.queue(PrintStyledContent(
                    line.as_str().with(settings::COLOR_TRANSCRIPT),
                ))?;
            } else {
                out.queue(Print(line))?;
            }
            out.queue(Print("\n"))?;
        }
        Ok(())
    }

    /// Write a section as a title followed by wrapped bullet items.
    pub fn write_section<W>(
        &self,
        out: &mut W,
        content: &SectionContent,
        cols: usize,
    ) -> io::Result<()>
    where
        W: Write + QueueableCommand,
    {
        if self.color {
            out.queue(PrintStyledContent(
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
            ))?;
            out.queue(Print(" "))?;
            out.queue(PrintStyledContent(
                content
                    .title
                    .as_str()
                    .with(settings::COLOR_SECTION_TITLE)
                    .bold(),
            ))?;
        } else {
            out.queue(Print(format!("{}:", content.title)))?;
        }
        out.queue(Print("\n"))?;

        let bullet = settings::section_bullet(self.color);
        let lead = format!("{}{bullet} ", settings::INDENT_1);
        let continuation = " ".repeat(lead.chars().count());
        let width = cols.saturating_sub(lead.chars().count()).max(1);
        for item in &content.items {
            for (idx, row) in wrap_to_width(item, width).into_iter().enumerate() {
                let prefix = if idx == 0 { &lead } else { &continuation };
                out.queue(Print(prefix))?;
                if self.color {
                    out.queue(PrintStyledContent(row.with(settings::COLOR_SECTION_ITEM)))?;
                } else {
                    out.queue(Print(row))?;
                }
                out.queue(Print("\n"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{ActiveSection, Interpreter};

    fn plain() -> Renderer {
        Renderer::new(false)
    }

    fn render(interpretation: &Interpretation, clear_screen: bool) -> String {
        let mut out = Vec::new();
        plain()
            .write_interpretation(
                &mut out,
                interpretation,
                &SectionCatalog::default(),
                80,
                clear_screen,
            )
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_lines_are_newline_terminated() {
        let mut out = Vec::new();
        plain()
            .write_lines(&mut out, &["$ man".to_string(), "hello".to_string()])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "$ man\nhello\n");
    }

    #[test]
    fn banner_uses_prompt_style_prefix() {
        let mut out = Vec::new();
        plain().write_banner(&mut out, "Software Engineer").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">luish:~/website/ echo Software Engineer\n"
        );
    }

    #[test]
    fn unknown_command_renders_echo_and_message() {
        let text = render(&Interpreter::default().interpret("ls"), false);
        assert_eq!(text, "$ ls\ncommand not found: ls\n");
    }

    #[test]
    fn section_command_renders_echo_then_section() {
        let interpretation = Interpreter::default().interpret("certs");
        assert_eq!(interpretation.section, ActiveSection::Certs);
        let text = render(&interpretation, false);
        let catalog = SectionCatalog::default();
        assert!(text.starts_with("$ certs\n"));
        assert!(text.contains(&format!("{}:\n", catalog.certs.title)));
        assert!(!text.contains("[[SHOW_"));
    }

    #[test]
    fn reset_clears_only_on_terminal() {
        let interpretation = Interpreter::default().interpret("clear");
        assert!(render(&interpretation, false).is_empty());
        assert!(render(&interpretation, true).contains("\u{1b}[2J"));
    }

    #[test]
    fn section_items_wrap_with_hanging_indent() {
        let content = SectionContent {
            title: "Projects".to_string(),
            items: vec!["alpha beta gamma".to_string()],
        };
        let mut out = Vec::new();
        plain().write_section(&mut out, &content, 14).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Projects:\n  - alpha beta\n    gamma\n"
        );
    }

    #[test]
    fn colored_lines_carry_ansi_styling() {
        let mut out = Vec::new();
        Renderer::new(true)
            .write_lines(&mut out, &["$ help".to_string()])
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("$ help"));
        assert!(text.contains("\u{1b}["));
    }
}
