//! Writing the bundled template to the per-user config location.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::sources::default_global_config_path;

/// What `termfolio --init` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created { path: PathBuf },
    /// File existed and `force` was not given; nothing was written.
    AlreadyInitialized { path: PathBuf },
    /// Existing file was copied to `backup_path`, then replaced.
    Overwritten { path: PathBuf, backup_path: PathBuf },
}

/// Write the template to `~/.config/termfolio/termfolio.toml`.
pub fn initialize_default_global_config(force: bool) -> Result<ConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve a per-user config directory".to_string())
    })?;
    initialize_config_at_path(&path, force)
}

pub(super) fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<ConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.exists() {
        if !force {
            return Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let backup_path = backup_path_for(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        return Ok(ConfigInitResult::Overwritten {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    // create_new so a concurrent writer's file is never clobbered.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
            Ok(ConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(ConfigInitResult::AlreadyInitialized {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Timestamped sibling path that does not exist yet.
fn backup_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| super::defaults::CONFIG_FILE_NAME.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut suffix = 0usize;
    loop {
        let name = if suffix == 0 {
            format!("{file_name}.{timestamp}.bak")
        } else {
            format!("{file_name}.{timestamp}.{suffix}.bak")
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn init_creates_then_refuses_to_clobber() {
        let dir = TestTempDir::new("init");
        let path = dir.child("termfolio/termfolio.toml");

        let created = initialize_config_at_path(&path, false).unwrap();
        assert_eq!(created, ConfigInitResult::Created { path: path.clone() });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);

        std::fs::write(&path, "[display]\ncolor = false\n").unwrap();
        let again = initialize_config_at_path(&path, false).unwrap();
        assert_eq!(again, ConfigInitResult::AlreadyInitialized { path: path.clone() });
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[display]\ncolor = false\n"
        );
    }

    #[test]
    fn forced_init_backs_up_existing_file() {
        let dir = TestTempDir::new("init-force");
        let path = dir.write_text("termfolio.toml", "# mine\n");

        let ConfigInitResult::Overwritten { backup_path, .. } =
            initialize_config_at_path(&path, true).unwrap()
        else {
            panic!("expected overwrite");
        };
        assert_eq!(std::fs::read_to_string(&backup_path).unwrap(), "# mine\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);
        assert!(backup_path.starts_with(dir.path()));
    }
}
