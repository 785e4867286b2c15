//! Command interpreter and history navigator behind the terminal portfolio.
//!
//! Everything here is synchronous and UI-agnostic: the interpreter returns an
//! [`Interpretation`] describing what changed, and callers (the crossterm
//! frontend, one-shot mode, tests) decide how to render it and whether to act
//! on its [`Effect`].

pub mod commands;
pub mod history;
pub mod interpreter;
pub mod sections;
pub mod session;

pub use commands::{matching_commands, Command, CommandTable};
pub use history::History;
pub use interpreter::{Effect, Interpretation, Interpreter, TranscriptUpdate};
pub use sections::{ActiveSection, SectionCatalog, SectionContent};
pub use session::{Session, STARTUP_COMMAND};
