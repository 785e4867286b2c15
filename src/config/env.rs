//! Environment overrides applied on top of file config.

use crate::error::ConfigError;

use super::Config;

/// Resume locator override.
pub const ENV_RESUME: &str = "TERMFOLIO_RESUME";
/// Portfolio owner override.
pub const ENV_OWNER: &str = "TERMFOLIO_OWNER";
/// Conventional color opt-out (<https://no-color.org>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(resume) = env_lookup(ENV_RESUME) {
        let trimmed = resume.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{ENV_RESUME} is set but empty"
            )));
        }
        config.portfolio.resume = trimmed.to_string();
    }
    if let Some(owner) = env_lookup(ENV_OWNER).filter(|v| !v.trim().is_empty()) {
        config.portfolio.owner = owner.trim().to_string();
    }
    if env_lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
        config.display.color = false;
    }
    Ok(())
}
