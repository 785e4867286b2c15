//! CLI entry point for termfolio.

mod app;
mod build_info;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TERMFOLIO_LOG";

fn main() {
    init_tracing();
    let args = cli::Args::parse();
    std::process::exit(app::entry::run(args));
}

/// Install a stderr subscriber; logging stays off unless `TERMFOLIO_LOG` is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
