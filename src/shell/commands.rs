//! Built-in command metadata and the command-to-output table.

use crate::shell::sections::ActiveSection;

/// Marker line that reveals the certifications section.
pub const MARKER_CERTS: &str = "[[SHOW_CERTS]]";
/// Marker line that reveals the projects section.
pub const MARKER_PROJECTS: &str = "[[SHOW_PROJECTS]]";
/// Marker line that reveals the experience section.
pub const MARKER_EXPERIENCE: &str = "[[SHOW_EXPERIENCE]]";

/// Literal output of `help`.
pub const HELP_LINES: [&str; 8] = [
    "Available commands:",
    "  help      - Show available commands",
    "  man       - Read the manual",
    "  clear     - Clear the screen",
    "  certs     - View certifications",
    "  projects  - View selected projects",
    "  resume  - Download latest resume",
    "  experience- View work history",
];

/// Output line printed when `resume` runs.
pub const RESUME_LINE: &str = "Opening resume...";

/// The closed set of commands understood by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Man,
    Clear,
    Certs,
    Projects,
    Experience,
    Resume,
}

impl Command {
    /// Every command, in `help` order.
    pub const ALL: [Command; 7] = [
        Command::Help,
        Command::Man,
        Command::Clear,
        Command::Certs,
        Command::Projects,
        Command::Resume,
        Command::Experience,
    ];

    /// Exact, case-sensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// One-line description shown by autocomplete.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show available commands",
            Self::Man => "Read the manual",
            Self::Clear => "Clear the screen",
            Self::Certs => "View certifications",
            Self::Projects => "View selected projects",
            Self::Experience => "View work history",
            Self::Resume => "Download latest resume",
        }
    }

    /// Name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Man => "man",
            Self::Clear => "clear",
            Self::Certs => "certs",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Resume => "resume",
        }
    }
}

/// Commands whose name starts with `prefix`, for autocomplete.
///
/// Blank input and exact matches produce no suggestions.
pub fn matching_commands(prefix: &str) -> Vec<Command> {
    if prefix.is_empty() || Command::parse(prefix).is_some() {
        return Vec::new();
    }
    Command::ALL
        .into_iter()
        .filter(|cmd| cmd.name().starts_with(prefix))
        .collect()
}

/// Map a marker line to the section it reveals.
pub fn section_for_marker(line: &str) -> Option<ActiveSection> {
    match line {
        MARKER_CERTS => Some(ActiveSection::Certs),
        MARKER_PROJECTS => Some(ActiveSection::Projects),
        MARKER_EXPERIENCE => Some(ActiveSection::Experience),
        _ => None,
    }
}

/// Immutable mapping from command to output lines, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    help: Vec<String>,
    man: Vec<String>,
    certs: Vec<String>,
    projects: Vec<String>,
    experience: Vec<String>,
    resume: Vec<String>,
    resume_locator: String,
}

impl CommandTable {
    /// Build the table for a portfolio owner and resume locator.
    pub fn new(owner: &str, resume_locator: &str) -> Self {
        Self {
            help: HELP_LINES.iter().map(|line| line.to_string()).collect(),
            man: vec![
                "manual mode - LH Terminal Emulator".to_string(),
                format!("A simulated terminal interface to explore the career of {owner}."),
                "Use `help` to discover available commands.".to_string(),
            ],
            certs: vec![MARKER_CERTS.to_string()],
            projects: vec![MARKER_PROJECTS.to_string()],
            experience: vec![MARKER_EXPERIENCE.to_string()],
            resume: vec![RESUME_LINE.to_string()],
            resume_locator: resume_locator.to_string(),
        }
    }

    /// Output lines for a command, markers included.
    pub fn output(&self, command: Command) -> &[String] {
        match command {
            Command::Help => &self.help,
            Command::Man => &self.man,
            Command::Clear => &[],
            Command::Certs => &self.certs,
            Command::Projects => &self.projects,
            Command::Experience => &self.experience,
            Command::Resume => &self.resume,
        }
    }

    /// Locator handed to the resource opener by `resume`.
    pub fn resume_locator(&self) -> &str {
        &self.resume_locator
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_OWNER,
            crate::config::DEFAULT_RESUME_LOCATOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("experience"), Some(Command::Experience));
        assert_eq!(Command::parse("HELP"), None);
        assert_eq!(Command::parse(" help"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn every_command_round_trips_through_its_name() {
        for cmd in Command::ALL {
            assert_eq!(Command::parse(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn matching_filters_by_prefix() {
        assert_eq!(matching_commands("c"), vec![Command::Clear, Command::Certs]);
        assert_eq!(matching_commands("pro"), vec![Command::Projects]);
        assert!(matching_commands("").is_empty());
        assert!(matching_commands("man").is_empty());
        assert!(matching_commands("zz").is_empty());
    }

    #[test]
    fn section_commands_emit_a_single_marker() {
        let table = CommandTable::default();
        assert_eq!(table.output(Command::Certs), &[MARKER_CERTS.to_string()]);
        assert_eq!(
            table.output(Command::Projects),
            &[MARKER_PROJECTS.to_string()]
        );
        assert_eq!(
            table.output(Command::Experience),
            &[MARKER_EXPERIENCE.to_string()]
        );
        assert!(table.output(Command::Clear).is_empty());
    }

    #[test]
    fn man_page_names_the_configured_owner() {
        let table = CommandTable::new("Ada Lovelace", "cv.pdf");
        assert!(table.output(Command::Man)[1].contains("Ada Lovelace"));
        assert_eq!(table.resume_locator(), "cv.pdf");
    }

    #[test]
    fn marker_lookup_only_matches_known_markers() {
        assert_eq!(section_for_marker(MARKER_CERTS), Some(ActiveSection::Certs));
        assert_eq!(section_for_marker("[[SHOW_NOTHING]]"), None);
    }
}
