//! Default configuration constants.
//!
//! Keeping defaults in one module lets the command table, the template, and
//! the loader share the same literals.

/// Embedded default `termfolio.toml` template.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/termfolio.toml");
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "termfolio.toml";
/// Directory under the config root holding the global config.
pub(super) const CONFIG_DIR_NAME: &str = "termfolio";
/// Portfolio owner named by `man`.
pub const DEFAULT_OWNER: &str = "Luis F Herrera";
/// Resume document opened by `resume`.
pub const DEFAULT_RESUME_LOCATOR: &str = "/LuisHerrera_Resume.pdf";
/// Banner prompt prefix shown before a headline.
pub const BANNER_PREFIX: &str = ">luish:~/website/ echo ";

/// Rotating headlines shown in the banner.
pub(super) fn default_headlines() -> Vec<String> {
    [
        "Hi, I’m Luis.",
        "I build scalable infrastructure",
        "Site Reliability Engineer",
        "Serial Founder",
        "Cloud Architect",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
