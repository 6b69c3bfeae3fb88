//! Path resolution against the configured roots

use crate::config::Config;
use crate::error::{DirmanError, InvalidTargetReason, Result};
use crate::naming;
use std::path::{Component, Path, PathBuf};

/// Resolves project and slot paths for one configuration
///
/// Every core component borrows a `Layout` instead of reading process-wide
/// state, so two layouts over different temp dirs never interfere.
#[derive(Debug, Clone)]
pub struct Layout {
    config: Config,
}

impl Layout {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory whose direct children are projects
    pub fn project_root(&self) -> &Path {
        &self.config.project_root
    }

    /// Directory holding the slots
    pub fn symlink_root(&self) -> &Path {
        &self.config.symlink_root
    }

    /// Path a project with this name has (or would have)
    pub fn project_path(&self, project_name: &str) -> PathBuf {
        self.project_root().join(project_name)
    }

    /// Slot path for a project
    pub fn slot_path(&self, project_name: &str, is_main: bool) -> PathBuf {
        self.symlink_root()
            .join(naming::slot_name(project_name, is_main))
    }

    pub fn main_slot_path(&self) -> PathBuf {
        self.symlink_root().join(naming::MAIN_SLOT_NAME)
    }

    /// Whether `path` exists and lies inside the project root
    ///
    /// With `top_level_only`, `path` must also be a direct child of the root.
    /// The root itself is never a project.
    pub fn is_valid_project_path(&self, path: &Path, top_level_only: bool) -> bool {
        if !path.exists() {
            return false;
        }
        let Ok(relative) = path.strip_prefix(self.project_root()) else {
            return false;
        };

        let mut components = relative.components();
        match (components.next(), components.next()) {
            (None, _) => false,
            (Some(_), Some(_)) => !top_level_only,
            (Some(Component::Normal(name)), None) => Some(name) == path.file_name(),
            (Some(_), None) => false,
        }
    }

    /// Like `is_valid_project_path(path, true)`, but says why a path fails
    pub(crate) fn check_link_target(&self, path: &Path) -> Result<()> {
        if self.is_valid_project_path(path, true) {
            return Ok(());
        }
        let reason = if !path.exists() {
            InvalidTargetReason::Missing
        } else if !self.is_valid_project_path(path, false) {
            InvalidTargetReason::OutsideRoot
        } else {
            InvalidTargetReason::NotTopLevel
        };
        Err(DirmanError::InvalidTarget {
            path: path.to_path_buf(),
            reason,
        })
    }
}
