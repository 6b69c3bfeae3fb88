//! Read-only queries over the project root and symlink root
//!
//! Listings come back in directory iteration order. Callers that display
//! them sort first.

use crate::error::{DirmanError, Result};
use crate::naming;
use crate::resolver::Layout;
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// A symlink in the symlink root and the target it stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot: PathBuf,
    pub target: PathBuf,
}

impl SlotEntry {
    /// Final segment of the slot path
    pub fn slot_name(&self) -> String {
        final_segment(&self.slot)
    }

    /// Final segment of the target, i.e. the project name
    pub fn project_name(&self) -> String {
        final_segment(&self.target)
    }
}

/// Queries over one layout
pub struct ProjectIndex<'a> {
    layout: &'a Layout,
}

impl<'a> ProjectIndex<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Every direct subdirectory of the project root
    pub fn list_project_paths(&self) -> Result<Vec<PathBuf>> {
        let root = self.layout.project_root();
        let mut paths = Vec::new();

        for entry in fs::read_dir(root).map_err(|e| DirmanError::io("list", root, e))? {
            let entry = entry.map_err(|e| DirmanError::io("list", root, e))?;
            let path = entry.path();
            if path.is_dir() {
                paths.push(path);
            }
        }

        Ok(paths)
    }

    /// Names of every project directory
    pub fn list_project_names(&self) -> Result<Vec<String>> {
        Ok(self
            .list_project_paths()?
            .iter()
            .map(|p| final_segment(p))
            .collect())
    }

    /// Name of the project the main slot points at
    ///
    /// When there is no main slot this is `Ok(None)` if `suppress_errors`,
    /// otherwise `NotFound`.
    pub fn active_project(&self, suppress_errors: bool) -> Result<Option<String>> {
        let main_slot = self.layout.main_slot_path();
        match fs::read_link(&main_slot) {
            Ok(target) => Ok(Some(final_segment(&target))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if suppress_errors {
                    Ok(None)
                } else {
                    Err(DirmanError::NotFound {
                        what: "main slot",
                        path: main_slot,
                    })
                }
            }
            Err(e) => Err(DirmanError::io("read link", main_slot, e)),
        }
    }

    /// Every symlink directly inside the symlink root
    ///
    /// With `managed_only`, only names matching the slot naming policy.
    pub fn all_managed_symlinks(&self, managed_only: bool) -> Result<Vec<PathBuf>> {
        let root = self.layout.symlink_root();
        let mut links = Vec::new();

        for entry in fs::read_dir(root).map_err(|e| DirmanError::io("list", root, e))? {
            let entry = entry.map_err(|e| DirmanError::io("list", root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| DirmanError::io("stat", entry.path(), e))?;
            if !file_type.is_symlink() {
                continue;
            }

            let path = entry.path();
            if managed_only && !naming::matches_slot_pattern(&path) {
                continue;
            }
            links.push(path);
        }

        Ok(links)
    }

    /// Symlinks whose stored target is exactly `project_path`
    ///
    /// Targets are compared as stored in the link, without normalization.
    pub fn symlinks_pointing_to(
        &self,
        project_path: &Path,
        managed_only: bool,
    ) -> Result<Vec<PathBuf>> {
        if !self.layout.is_valid_project_path(project_path, true) {
            return Err(DirmanError::invalid_argument(
                project_path,
                "path did not point to a valid project directory",
            ));
        }

        let mut matching = Vec::new();
        for link in self.all_managed_symlinks(managed_only)? {
            if read_slot(&link)? == project_path {
                matching.push(link);
            }
        }

        tracing::debug!(
            project = %project_path.display(),
            count = matching.len(),
            "resolved symlinks pointing to project"
        );
        Ok(matching)
    }

    /// Every managed slot with its target
    pub fn slot_entries(&self) -> Result<Vec<SlotEntry>> {
        self.all_managed_symlinks(true)?
            .into_iter()
            .map(|slot| {
                let target = read_slot(&slot)?;
                Ok(SlotEntry { slot, target })
            })
            .collect()
    }
}

/// Most recent access or modification time of `path`
///
/// With `recursive`, the latest over `path` and everything below it.
/// Symlinks inside the tree are not followed.
pub fn last_activity(path: &Path, recursive: bool) -> Result<DateTime<Local>> {
    if !recursive {
        let meta = fs::metadata(path).map_err(|e| DirmanError::io("stat", path, e))?;
        let latest = metadata_activity(&meta).map_err(|e| DirmanError::io("stat", path, e))?;
        return Ok(latest.into());
    }

    let mut latest = SystemTime::UNIX_EPOCH;
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|err| {
            let at = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| path.to_path_buf());
            DirmanError::io("walk", at, err.into())
        })?;
        let meta = entry
            .metadata()
            .map_err(|err| DirmanError::io("stat", entry.path(), err.into()))?;
        let activity =
            metadata_activity(&meta).map_err(|e| DirmanError::io("stat", entry.path(), e))?;
        latest = latest.max(activity);
    }

    Ok(latest.into())
}

/// Read the stored target of a slot
pub(crate) fn read_slot(path: &Path) -> Result<PathBuf> {
    fs::read_link(path).map_err(|e| DirmanError::io("read link", path, e))
}

/// Whether anything, including a dangling symlink, exists at `path`
pub(crate) fn entry_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(DirmanError::io("stat", path, e)),
    }
}

fn metadata_activity(meta: &Metadata) -> io::Result<SystemTime> {
    let modified = meta.modified()?;
    Ok(match meta.accessed() {
        Ok(accessed) => accessed.max(modified),
        Err(_) => modified,
    })
}

fn final_segment(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
