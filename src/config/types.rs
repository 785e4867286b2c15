//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML layout and is deliberately strict about
//! unknown keys; `Config` is the resolved form handed to the rest of the crate.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::defaults::{default_headlines, DEFAULT_OWNER, DEFAULT_RESUME_LOCATOR};
use crate::shell::{SectionCatalog, SectionContent};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub portfolio: PortfolioConfig,
    pub sections: SectionCatalog,
}

/// Terminal presentation settings under `[display]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
    pub banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}

/// Portfolio identity under `[portfolio]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub owner: String,
    /// Locator handed to the resource opener by `resume`.
    pub resume: String,
    pub headlines: Vec<String>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            resume: DEFAULT_RESUME_LOCATOR.to_string(),
            headlines: default_headlines(),
        }
    }
}

/// Raw TOML file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) display: DisplayConfig,
    pub(super) portfolio: PortfolioConfig,
    pub(super) sections: FileSections,
}

/// Optional per-section overrides under `[sections.<name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileSections {
    pub(super) certs: Option<SectionContent>,
    pub(super) projects: Option<SectionContent>,
    pub(super) experience: Option<SectionContent>,
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./termfolio.toml`.
    Local,
    /// `<config root>/termfolio/termfolio.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => write!(f, "./{}", super::defaults::CONFIG_FILE_NAME),
            Self::BuiltInDefaults => write!(f, "built-in defaults"),
        }
    }
}

/// Resolved config plus its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
