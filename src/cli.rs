//! CLI argument parsing via clap.

use clap::Parser;

/// A terminal-style portfolio shell.
#[derive(Debug, Parser)]
#[command(
    name = "termfolio",
    version = crate::build_info::CLI_VERSION,
    after_help = crate::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Command to run. If provided, runs in one-shot mode and exits.
    pub command: Option<String>,

    /// Path to config file (default: ./termfolio.toml or
    /// ~/.config/termfolio/termfolio.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Override the resume locator opened by `resume`.
    #[arg(long = "resume", value_name = "LOCATOR")]
    pub resume: Option<String>,

    /// Print the interpretation as JSON (one-shot mode only).
    #[arg(long = "json", requires = "command")]
    pub json: bool,

    /// Write the default config to ~/.config/termfolio/termfolio.toml and exit.
    #[arg(long = "init", conflicts_with_all = ["command", "json"])]
    pub init: bool,

    /// With --init, back up and replace an existing config file.
    #[arg(long = "force", requires = "init")]
    pub force: bool,
}
