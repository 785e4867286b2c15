//! Resolve one command name into a transcript update and section change.

use crate::shell::commands::{section_for_marker, Command, CommandTable};
use crate::shell::sections::ActiveSection;
use serde::Serialize;
use tracing::debug;

/// Prefix echoed before every interpreted command.
pub const ECHO_PREFIX: &str = "$ ";

/// How the transcript changes after interpreting a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "lowercase")]
pub enum TranscriptUpdate {
    /// Append these lines in order.
    Append(Vec<String>),
    /// Replace the transcript with nothing.
    Reset,
}

/// Side effect the caller must perform on the interpreter's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "locator", rename_all = "snake_case")]
pub enum Effect {
    /// Open an external resource in a new context.
    OpenResource(String),
}

/// Result of interpreting one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// False when the name was not in the command table.
    pub recognized: bool,
    pub transcript: TranscriptUpdate,
    pub section: ActiveSection,
    pub effect: Option<Effect>,
}

const NOT_FOUND_PREFIX: &str = "command not found: ";

/// Stateless resolver over an immutable command table.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    table: CommandTable,
}

impl Interpreter {
    pub fn new(table: CommandTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Interpret `name` exactly as given; callers do their own trimming.
    pub fn interpret(&self, name: &str) -> Interpretation {
        let Some(command) = Command::parse(name) else {
            debug!(command = name, "command not found");
            return Interpretation {
                recognized: false,
                transcript: TranscriptUpdate::Append(vec![
                    echo_line(name),
                    format!("{NOT_FOUND_PREFIX}{name}"),
                ]),
                section: ActiveSection::None,
                effect: None,
            };
        };

        if command == Command::Clear {
            debug!("transcript reset");
            return Interpretation {
                recognized: true,
                transcript: TranscriptUpdate::Reset,
                section: ActiveSection::None,
                effect: None,
            };
        }

        let output = self.table.output(command);
        let section = single_marker_section(output);
        let mut lines = Vec::with_capacity(output.len() + 1);
        lines.push(echo_line(name));
        lines.extend(
            output
                .iter()
                .filter(|line| section_for_marker(line).is_none())
                .cloned(),
        );

        let effect = (command == Command::Resume)
            .then(|| Effect::OpenResource(self.table.resume_locator().to_string()));

        debug!(command = name, ?section, lines = lines.len(), "interpreted");
        Interpretation {
            recognized: true,
            transcript: TranscriptUpdate::Append(lines),
            section,
            effect,
        }
    }
}

fn echo_line(name: &str) -> String {
    format!("{ECHO_PREFIX}{name}")
}

/// A section is revealed only when exactly one distinct marker is present.
fn single_marker_section(output: &[String]) -> ActiveSection {
    let mut found: Option<ActiveSection> = None;
    for section in output.iter().filter_map(|line| section_for_marker(line)) {
        match found {
            None => found = Some(section),
            Some(existing) if existing == section => {}
            Some(_) => return ActiveSection::None,
        }
    }
    found.unwrap_or_default()
}
