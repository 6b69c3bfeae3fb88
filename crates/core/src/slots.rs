//! Symlink mutations
//!
//! Everything that creates, renames or removes a slot lives here. Reads go
//! through [`ProjectIndex`]. No step takes a lock; sequences of steps are not
//! atomic as a whole.

use crate::error::{DirmanError, Result};
use crate::index::{self, ProjectIndex};
use crate::naming;
use crate::resolver::Layout;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How `link_project` resolves conflicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Replace a slot that points at another project
    pub overwrite: bool,
    /// When replacing the main slot, move its occupant to an auxiliary slot
    /// instead of dropping it
    pub keep_old_main: bool,
    /// Link even if the project is already linked through another slot
    pub ignore_existing_elsewhere: bool,
}

/// Mutates slots under one layout
pub struct SlotManager<'a> {
    layout: &'a Layout,
    index: ProjectIndex<'a>,
}

impl<'a> SlotManager<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            index: ProjectIndex::new(layout),
        }
    }

    pub fn index(&self) -> &ProjectIndex<'a> {
        &self.index
    }

    /// Remove a symlink, and only a symlink
    ///
    /// With `managed_only` the name must also match the slot naming policy.
    pub fn delete_slot(&self, path: &Path, managed_only: bool) -> Result<PathBuf> {
        let is_symlink = match fs::symlink_metadata(path) {
            Ok(meta) => meta.file_type().is_symlink(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(DirmanError::io("stat", path, e)),
        };
        if !is_symlink {
            return Err(DirmanError::invalid_argument(
                path,
                "refusing to delete something that is not a symlink",
            ));
        }
        if managed_only && !naming::matches_slot_pattern(path) {
            return Err(DirmanError::invalid_argument(
                path,
                "symlink does not match the project slot naming pattern",
            ));
        }

        fs::remove_file(path).map_err(|e| DirmanError::io("remove", path, e))?;
        tracing::info!(slot = %path.display(), "removed slot");
        Ok(path.to_path_buf())
    }

    /// Move the main slot's occupant into its auxiliary slot
    ///
    /// Returns the auxiliary slot path. If that slot already points where
    /// main does, main is simply removed. If it points elsewhere this fails
    /// with `AlreadyExists` unless `overwrite_existing`.
    pub fn promote_main_to_auxiliary(&self, overwrite_existing: bool) -> Result<PathBuf> {
        let main_slot = self.layout.main_slot_path();
        let active = self
            .index
            .active_project(false)?
            .ok_or_else(|| DirmanError::NotFound {
                what: "main slot",
                path: main_slot.clone(),
            })?;
        let aux_slot = self.layout.slot_path(&active, false);

        if index::entry_exists(&aux_slot)? {
            let main_target = index::read_slot(&main_slot)?;
            let aux_target = fs::read_link(&aux_slot).ok();

            if aux_target.as_deref() == Some(main_target.as_path()) {
                self.delete_slot(&main_slot, true)?;
                return Ok(aux_slot);
            }
            if !overwrite_existing {
                return Err(DirmanError::AlreadyExists { path: aux_slot });
            }
            self.delete_slot(&aux_slot, true)?;
        }

        fs::rename(&main_slot, &aux_slot).map_err(|e| DirmanError::io("rename", &main_slot, e))?;
        tracing::info!(
            project = %active,
            slot = %aux_slot.display(),
            "moved main project to auxiliary slot"
        );
        Ok(aux_slot)
    }

    /// Remove the main slot
    ///
    /// `NotFound` when there is nothing to remove.
    pub fn unlink_main(&self) -> Result<Vec<PathBuf>> {
        let main_slot = self.layout.main_slot_path();
        if !index::entry_exists(&main_slot)? {
            return Err(DirmanError::NotFound {
                what: "main slot",
                path: main_slot,
            });
        }
        Ok(vec![self.delete_slot(&main_slot, true)?])
    }

    /// Remove the main slot, or every managed slot
    pub fn unlink_all(&self, main_only: bool) -> Result<Vec<PathBuf>> {
        if main_only {
            return self.unlink_main();
        }
        self.index
            .all_managed_symlinks(true)?
            .iter()
            .map(|slot| self.delete_slot(slot, true))
            .collect()
    }

    /// Remove every managed slot pointing at `project_path`
    pub fn unlink_project(&self, project_path: &Path) -> Result<Vec<PathBuf>> {
        self.index
            .symlinks_pointing_to(project_path, true)?
            .iter()
            .map(|slot| self.delete_slot(slot, true))
            .collect()
    }

    /// Link a project into the main slot or its auxiliary slot
    ///
    /// The target is validated before anything is removed, and the
    /// linked-elsewhere check runs after a stale slot has been cleared.
    pub fn link_project(
        &self,
        project_path: &Path,
        is_main: bool,
        options: LinkOptions,
    ) -> Result<PathBuf> {
        self.layout.check_link_target(project_path)?;

        let project_name = project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let slot = self.layout.slot_path(&project_name, is_main);

        if index::entry_exists(&slot)? {
            if fs::read_link(&slot).ok().as_deref() == Some(project_path) {
                return Err(DirmanError::AlreadyLinked {
                    project: project_name,
                    slot,
                });
            }
            if !options.overwrite {
                return Err(DirmanError::SlotOccupied { slot });
            }

            if is_main && options.keep_old_main {
                self.promote_main_to_auxiliary(false)?;
            } else {
                self.delete_slot(&slot, true)?;
            }
        }

        if !options.ignore_existing_elsewhere {
            let existing = self.index.symlinks_pointing_to(project_path, true)?;
            if !existing.is_empty() {
                return Err(DirmanError::LinkedElsewhere {
                    project: project_name,
                    links: existing,
                });
            }
        }

        if !naming::matches_slot_pattern(&slot) {
            tracing::warn!(
                slot = %slot.display(),
                "slot name is outside the managed pattern and will not be cleaned up by unlink"
            );
        }

        symlink_dir(project_path, &slot).map_err(|e| DirmanError::io("create symlink", &slot, e))?;
        tracing::info!(
            project = %project_name,
            slot = %slot.display(),
            main = is_main,
            "linked project"
        );
        Ok(slot)
    }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
