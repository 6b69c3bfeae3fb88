//! Sandboxed directory layout for CLI tests

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home with a project root and a separate symlink root
pub struct TestRoots {
    _temp_dir: TempDir,
    home: PathBuf,
}

impl TestRoots {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let home = temp_dir.path().join("home");
        fs::create_dir_all(home.join("Projects"))?;
        fs::create_dir_all(home.join("links"))?;
        fs::create_dir_all(home.join(".config").join("dirman"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            home,
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn project_root(&self) -> PathBuf {
        self.home.join("Projects")
    }

    pub fn symlink_root(&self) -> PathBuf {
        self.home.join("links")
    }

    /// `XDG_CONFIG_HOME` handed to the binary
    pub fn config_home(&self) -> PathBuf {
        self.home.join(".config")
    }

    /// Config file location; absent unless a test writes it
    pub fn config_path(&self) -> PathBuf {
        self.config_home().join("dirman").join("config.toml")
    }

    /// Create an empty project directory
    pub fn add_project(&self, name: &str) -> Result<PathBuf> {
        let path = self.project_root().join(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn main_slot(&self) -> PathBuf {
        self.symlink_root().join("current_project")
    }

    pub fn aux_slot(&self, name: &str) -> PathBuf {
        self.symlink_root().join(format!("project_{}", name))
    }

    /// Target of a slot, or `None` when the slot is absent
    pub fn target(&self, slot: &Path) -> Option<PathBuf> {
        fs::read_link(slot).ok()
    }
}
