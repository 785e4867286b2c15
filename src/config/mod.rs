//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TERMFOLIO_RESUME`, `TERMFOLIO_OWNER`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./termfolio.toml in the current directory
//! 4. $XDG_CONFIG_HOME/termfolio/termfolio.toml (or
//!    ~/.config/termfolio/termfolio.toml)
//! 5. Built-in defaults
//!
//! CLI flags are applied by the binary after loading.

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use defaults::{
    BANNER_PREFIX, DEFAULT_CONFIG_TEMPLATE, DEFAULT_OWNER, DEFAULT_RESUME_LOCATOR,
};
pub use env::{ENV_NO_COLOR, ENV_OWNER, ENV_RESUME};
pub use init::{initialize_default_global_config, ConfigInitResult};
pub use loader::{load_config, load_config_with_source};
pub use sources::{config_root_dir, default_global_config_path};
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig, PortfolioConfig};

use crate::shell::{CommandTable, Interpreter};

impl Config {
    /// Build the immutable command table for this portfolio.
    pub fn command_table(&self) -> CommandTable {
        CommandTable::new(&self.portfolio.owner, &self.portfolio.resume)
    }

    /// Build an interpreter over this portfolio's command table.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.command_table())
    }

    /// Re-check invariants after callers mutate a loaded config.
    pub fn validate(&self) -> Result<(), crate::error::ConfigError> {
        loader::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::error::ConfigError;
    use crate::shell::ActiveSection;
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    fn no_file(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn no_root() -> Option<PathBuf> {
        None
    }

    fn parse_for_test(text: &str) -> Result<Config, ConfigError> {
        let text = text.to_string();
        load_config_from_sources(
            Some("inline.toml"),
            move |_| Ok(text.clone()),
            no_env,
            no_root,
        )
        .map(|loaded| loaded.config)
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert!(c.display.color);
        assert!(c.display.banner);
        assert_eq!(c.portfolio.owner, DEFAULT_OWNER);
        assert_eq!(c.portfolio.resume, DEFAULT_RESUME_LOCATOR);
        assert_eq!(c.portfolio.headlines.len(), 5);
        assert_eq!(c.sections.certs.items.len(), 3);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let loaded = load_config_from_sources(None, no_file, no_env, no_root).unwrap();
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn bundled_template_matches_defaults() {
        let c = parse_for_test(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn parse_partial_toml() {
        let c = parse_for_test(
            r#"
            [display]
            color = false

            [portfolio]
            owner = "Ada Lovelace"
        "#,
        )
        .unwrap();
        assert!(!c.display.color);
        assert!(c.display.banner);
        assert_eq!(c.portfolio.owner, "Ada Lovelace");
        assert_eq!(c.portfolio.resume, DEFAULT_RESUME_LOCATOR);
    }

    #[test]
    fn section_overrides_replace_only_named_sections() {
        let c = parse_for_test(
            r#"
            [sections.projects]
            title = "Side Projects"
            items = ["Analytical engine notes"]
        "#,
        )
        .unwrap();
        let projects = c.sections.get(ActiveSection::Projects).unwrap();
        assert_eq!(projects.title, "Side Projects");
        assert_eq!(projects.items, vec!["Analytical engine notes"]);
        assert_eq!(c.sections.certs.title, "Certifications");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_for_test("[display]\ncolour = true\n").unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }

    #[test]
    fn empty_resume_is_invalid() {
        let err = parse_for_test("[portfolio]\nresume = \"  \"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: portfolio.resume must not be empty"
        );
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("nope.toml"), no_file, no_env, no_root)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn global_file_is_used_when_no_local_file_exists() {
        let root = PathBuf::from("/cfg");
        let global = root.join("termfolio").join("termfolio.toml");
        let expected = global.clone();
        let loaded = load_config_from_sources(
            None,
            move |path| {
                if path == global {
                    Ok("[portfolio]\nowner = \"Global Owner\"\n".to_string())
                } else {
                    no_file(path)
                }
            },
            no_env,
            move || Some(root.clone()),
        )
        .unwrap();
        assert_eq!(loaded.source, ConfigSource::Global(expected));
        assert_eq!(loaded.config.portfolio.owner, "Global Owner");
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_RESUME, "https://example.com/cv.pdf"),
            (ENV_OWNER, "Env Owner"),
            (ENV_NO_COLOR, "1"),
        ]);
        let loaded = load_config_from_sources(
            Some("inline.toml"),
            |_| Ok("[portfolio]\nresume = \"file.pdf\"\n".to_string()),
            |name| env.get(name).map(|v| v.to_string()),
            no_root,
        )
        .unwrap();
        assert_eq!(loaded.config.portfolio.resume, "https://example.com/cv.pdf");
        assert_eq!(loaded.config.portfolio.owner, "Env Owner");
        assert!(!loaded.config.display.color);
    }

    #[test]
    fn empty_no_color_keeps_color() {
        let loaded = load_config_from_sources(
            None,
            no_file,
            |name| (name == ENV_NO_COLOR).then(String::new),
            no_root,
        )
        .unwrap();
        assert!(loaded.config.display.color);
    }

    #[test]
    fn empty_resume_env_is_rejected() {
        let err = load_config_from_sources(
            None,
            no_file,
            |name| (name == ENV_RESUME).then(|| " ".to_string()),
            no_root,
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_RESUME), "got: {err}");
    }

    #[test]
    fn load_config_reads_a_real_file() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text("termfolio.toml", "[display]\nbanner = false\n");
        let loaded = load_config_with_source(Some(path.to_string_lossy().as_ref())).unwrap();
        assert_eq!(loaded.source, ConfigSource::Explicit(path));
        assert!(!loaded.config.display.banner);
    }

    #[test]
    fn command_table_uses_portfolio_identity() {
        let mut c = Config::default();
        c.portfolio.owner = "Grace Hopper".into();
        c.portfolio.resume = "hopper.pdf".into();
        let table = c.command_table();
        assert_eq!(table.resume_locator(), "hopper.pdf");
    }
}
