//! Configuration for the project and symlink roots
//!
//! Sources, lowest precedence first: built-in defaults, the TOML config
//! file, then `DIRMAN_*` environment variables. Command-line overrides are
//! applied by the caller on the returned value.

use crate::error::{DirmanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "DIRMAN_CONFIG";
/// Environment override for the project root
pub const PROJECT_ROOT_ENV: &str = "DIRMAN_PROJECT_ROOT";
/// Environment override for the symlink root
pub const SYMLINK_ROOT_ENV: &str = "DIRMAN_SYMLINK_ROOT";

const APP_DIR: &str = "dirman";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_PROJECT_DIR: &str = "Projects";

const EXAMPLE_CONFIG: &str = r#"# dirman configuration
#
# Directory holding one sub-directory per project.
project_root = "~/Projects"

# Directory where the current_project and project_<NAME> symlinks are created.
symlink_root = "~"
"#;

/// Locations of the two directories the tool manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Directory whose direct children are projects
    pub project_root: PathBuf,
    /// Directory holding the main and auxiliary slots
    pub symlink_root: PathBuf,
}

/// On-disk shape of the config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    project_root: Option<String>,
    symlink_root: Option<String>,
}

impl Config {
    pub fn new(project_root: impl Into<PathBuf>, symlink_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            symlink_root: symlink_root.into(),
        }
    }

    /// `~/Projects` and `~`
    pub fn defaults(home_dir: &Path) -> Self {
        Self::new(home_dir.join(DEFAULT_PROJECT_DIR), home_dir)
    }

    /// Load from the real environment and config file location
    pub fn load() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(DirmanError::NoHomeDirectory)?;
        let current_dir =
            std::env::current_dir().map_err(|e| DirmanError::io("read current directory", ".", e))?;
        let env: HashMap<String, String> = std::env::vars().collect();
        let config_file = config_file_path(&env);
        Self::load_from(config_file.as_deref(), &env, &home_dir, &current_dir)
    }

    /// Load from an explicit config file and environment snapshot
    ///
    /// A missing config file is skipped unless `$DIRMAN_CONFIG` names it.
    /// Relative roots are resolved against `current_dir`; symlink targets
    /// are stored verbatim, so a relative root would produce dangling slots.
    pub fn load_from(
        config_file: Option<&Path>,
        env: &HashMap<String, String>,
        home_dir: &Path,
        current_dir: &Path,
    ) -> Result<Self> {
        let mut config = Self::defaults(home_dir);

        let explicit = env.get(CONFIG_ENV).map(PathBuf::from);
        if let Some(path) = config_file.filter(|p| !p.exists()) {
            if explicit.as_deref() == Some(path) {
                return Err(DirmanError::ConfigRead {
                    path: path.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("file named by {} does not exist", CONFIG_ENV),
                    ),
                });
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }

        if let Some(path) = config_file.filter(|p| p.exists()) {
            let contents = std::fs::read_to_string(path).map_err(|source| {
                DirmanError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            let file: ConfigFile =
                toml::from_str(&contents).map_err(|source| DirmanError::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), "loaded config file");

            if let Some(root) = file.project_root {
                config.project_root = resolve_path(&root, home_dir, current_dir);
            }
            if let Some(root) = file.symlink_root {
                config.symlink_root = resolve_path(&root, home_dir, current_dir);
            }
        }

        if let Some(root) = env.get(PROJECT_ROOT_ENV) {
            config.project_root = resolve_path(root, home_dir, current_dir);
        }
        if let Some(root) = env.get(SYMLINK_ROOT_ENV) {
            config.symlink_root = resolve_path(root, home_dir, current_dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the slot logic cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.project_root.as_os_str().is_empty() {
            return Err(DirmanError::ConfigInvalid(
                "project_root must not be empty".to_string(),
            ));
        }
        if self.symlink_root.as_os_str().is_empty() {
            return Err(DirmanError::ConfigInvalid(
                "symlink_root must not be empty".to_string(),
            ));
        }
        for (key, root) in [
            ("project_root", &self.project_root),
            ("symlink_root", &self.symlink_root),
        ] {
            if root.is_relative() {
                return Err(DirmanError::ConfigInvalid(format!(
                    "{} must be an absolute path (got {})",
                    key,
                    root.display()
                )));
            }
        }
        if self.project_root == self.symlink_root {
            return Err(DirmanError::ConfigInvalid(format!(
                "project_root and symlink_root must differ (both are {})",
                self.project_root.display()
            )));
        }
        Ok(())
    }

    /// Commented example config file
    pub fn example() -> &'static str {
        EXAMPLE_CONFIG
    }
}

/// Where the config file is looked up
///
/// `$DIRMAN_CONFIG`, then `$XDG_CONFIG_HOME/dirman/config.toml`, then the
/// platform config directory.
pub fn config_file_path(env: &HashMap<String, String>) -> Option<PathBuf> {
    if let Some(path) = env.get(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    if let Some(xdg) = env.get("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Join a relative path onto `current_dir`; empty and absolute paths pass through
pub fn resolve_relative(path: &Path, current_dir: &Path) -> PathBuf {
    if path.as_os_str().is_empty() || path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir.join(path)
    }
}

fn resolve_path(value: &str, home_dir: &Path, current_dir: &Path) -> PathBuf {
    resolve_relative(&expand_tilde(value, home_dir), current_dir)
}

fn expand_tilde(value: &str, home_dir: &Path) -> PathBuf {
    if value == "~" {
        return home_dir.to_path_buf();
    }
    match value.strip_prefix("~/") {
        Some(rest) => home_dir.join(rest),
        None => PathBuf::from(value),
    }
}
