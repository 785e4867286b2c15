//! Application entry orchestration for the termfolio CLI.

use crate::app::{exec_mode, repl_mode};
use crate::build_info;
use crate::cli::Args;
use std::io::{self, IsTerminal};
use termfolio::config::{
    initialize_default_global_config, load_config_with_source, Config, ConfigInitResult,
};
use termfolio::error::{ConfigError, TermfolioError};
use termfolio::opener::SystemOpener;
use termfolio::tui::Renderer;
use tracing::debug;

/// Load config, apply CLI overrides, and dispatch to the selected mode.
///
/// Returns the process exit status.
pub(crate) fn run(args: Args) -> i32 {
    if args.init {
        return run_init(args.force, !args.no_color && io::stderr().is_terminal());
    }

    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            // Config never loaded, so color follows the flag and the stream only.
            let color = !args.no_color && io::stderr().is_terminal();
            Renderer::new(color).error(&TermfolioError::from(err).to_string());
            return 1;
        }
    };
    debug!(
        version = build_info::VERSION,
        commit = build_info::GIT_COMMIT,
        built = build_info::BUILD_TIMESTAMP,
        source = %loaded.source,
        "starting"
    );

    let mut config = loaded.config;
    let renderer = match apply_cli_overrides(&mut config, args.no_color, args.resume.as_deref()) {
        // Piped output stays free of escape codes.
        Ok(()) => Renderer::new(config.display.color && io::stdout().is_terminal()),
        Err(err) => {
            Renderer::new(false).error(&TermfolioError::from(err).to_string());
            return 1;
        }
    };

    let result = match args.command.as_deref() {
        Some(command) => {
            exec_mode::run_exec_mode(&renderer, &config, command, args.json, &SystemOpener)
        }
        None => repl_mode::run_repl_mode(&renderer, &config, &SystemOpener),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            renderer.error(&err.to_string());
            1
        }
    }
}

/// Handle `--init`: write the bundled template to the per-user config path.
fn run_init(force: bool, color: bool) -> i32 {
    match initialize_default_global_config(force) {
        Ok(result) => {
            println!("{}", init_message(&result));
            0
        }
        Err(err) => {
            Renderer::new(color).error(&TermfolioError::from(err).to_string());
            1
        }
    }
}

fn init_message(result: &ConfigInitResult) -> String {
    match result {
        ConfigInitResult::Created { path } => format!("created {}", path.display()),
        ConfigInitResult::AlreadyInitialized { path } => format!(
            "{} already exists; pass --force to replace it",
            path.display()
        ),
        ConfigInitResult::Overwritten { path, backup_path } => format!(
            "replaced {} (previous file saved to {})",
            path.display(),
            backup_path.display()
        ),
    }
}

/// Apply `--no-color` and `--resume`, which win over every config source.
fn apply_cli_overrides(
    config: &mut Config,
    no_color: bool,
    resume: Option<&str>,
) -> Result<(), ConfigError> {
    if no_color {
        config.display.color = false;
    }
    if let Some(resume) = resume {
        config.portfolio.resume = resume.to_string();
    }
    config.validate()
}
