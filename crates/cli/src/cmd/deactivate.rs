//! Remove slot symlinks

use anyhow::{Context, Result};
use dirman_core::{Layout, SlotManager};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn run(layout: &Layout, target: &str) -> Result<()> {
    let slots = SlotManager::new(layout);

    // 1. Pick the slots to remove
    let removed: Vec<PathBuf> = match target {
        "main" => {
            if slots.index().active_project(true)?.is_none() {
                println!("{}", "No main project set, no changes made".dimmed());
                return Ok(());
            }
            slots.unlink_main().context("Failed to unlink main project")?
        }
        "all" => slots.unlink_all(false).context("Failed to unlink slots")?,
        name => slots
            .unlink_project(&layout.project_path(name))
            .with_context(|| format!("Failed to unlink '{}'", name))?,
    };

    // 2. Report
    if removed.is_empty() {
        println!("{}", "Nothing to remove".dimmed());
        return Ok(());
    }
    println!("{} Removed {} link(s):", "✓".green(), removed.len());
    for path in &removed {
        println!("  {}", path.display().to_string().cyan());
    }

    Ok(())
}
