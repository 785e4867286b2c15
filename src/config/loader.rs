//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::types::FileConfig;
use super::{Config, LoadedConfig};
use crate::shell::SectionCatalog;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source it came from.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed);
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    info!(%source, "configuration loaded");

    Ok(LoadedConfig { config, source })
}

fn resolve_file_config(parsed: FileConfig) -> Config {
    let defaults = SectionCatalog::default();
    Config {
        display: parsed.display,
        portfolio: parsed.portfolio,
        sections: SectionCatalog {
            certs: parsed.sections.certs.unwrap_or(defaults.certs),
            projects: parsed.sections.projects.unwrap_or(defaults.projects),
            experience: parsed.sections.experience.unwrap_or(defaults.experience),
        },
    }
}

pub(super) fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.portfolio.resume.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "portfolio.resume must not be empty".to_string(),
        ));
    }
    if config.portfolio.owner.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "portfolio.owner must not be empty".to_string(),
        ));
    }
    Ok(())
}
