//! One visitor session: transcript, active section, and history.

use crate::shell::history::History;
use crate::shell::interpreter::{Interpretation, Interpreter, TranscriptUpdate};
use crate::shell::sections::ActiveSection;
use tracing::debug;

/// Command run automatically when a session starts.
pub const STARTUP_COMMAND: &str = "help";

/// Owns all mutable state for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    interpreter: Interpreter,
    transcript: Vec<String>,
    section: ActiveSection,
    history: History,
}

impl Session {
    /// Build an empty session without running anything.
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            transcript: Vec::new(),
            section: ActiveSection::None,
            history: History::new(),
        }
    }

    /// Build a session and pre-populate the transcript with `help`.
    ///
    /// The startup run is not recorded in history.
    pub fn start(interpreter: Interpreter) -> (Self, Interpretation) {
        let mut session = Self::new(interpreter);
        let startup = session.run(STARTUP_COMMAND);
        (session, startup)
    }

    /// Handle one submitted input line.
    ///
    /// Blank input changes nothing and returns `None`. Otherwise the trimmed
    /// line is recorded in history and interpreted, recognized or not.
    pub fn submit(&mut self, raw: &str) -> Option<Interpretation> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.history.submit(trimmed);
        Some(self.run(trimmed))
    }

    /// Interpret a command name and apply the result, bypassing history.
    pub fn run(&mut self, name: &str) -> Interpretation {
        let interpretation = self.interpreter.interpret(name);
        self.apply(&interpretation);
        interpretation
    }

    fn apply(&mut self, interpretation: &Interpretation) {
        match &interpretation.transcript {
            TranscriptUpdate::Append(lines) => self.transcript.extend(lines.iter().cloned()),
            TranscriptUpdate::Reset => self.transcript.clear(),
        }
        self.section = interpretation.section;
        debug!(
            transcript_len = self.transcript.len(),
            section = ?self.section,
            "session updated"
        );
    }

    pub fn recall_previous(&mut self) -> Option<&str> {
        self.history.recall_previous()
    }

    pub fn recall_next(&mut self) -> Option<&str> {
        self.history.recall_next()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn section(&self) -> ActiveSection {
        self.section
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable access for line editors that drive recall directly.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}
