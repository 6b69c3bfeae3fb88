//! Create a new project and optionally make it the main project

use anyhow::{Context, Result};
use dirman_core::{create_project, prefixes, Layout, LinkOptions, NewProject, SlotManager};
use owo_colors::OwoColorize;

/// Requested codes that are not in the prefix table, uppercased
pub fn unknown_prefixes(codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .filter(|code| {
            let mut chars = code.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => prefixes::lookup(c).is_none(),
                // multi-letter codes are rejected by create_project
                _ => false,
            }
        })
        .map(|code| code.to_uppercase())
        .collect()
}

pub fn run(layout: &Layout, request: NewProject, activate: bool) -> Result<()> {
    // 1. Flag codes outside the known categories; they are still accepted
    for code in unknown_prefixes(&request.prefixes) {
        println!(
            "{} Prefix '{}' is not a known category (see `dirman prefixes`)",
            "!".yellow(),
            code.yellow()
        );
    }

    // 2. Allocate directory and README
    let path = create_project(layout, &request).context("Failed to create project")?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!(
        "{} Created project '{}' at {}",
        "✓".green(),
        name.magenta(),
        path.display().to_string().cyan()
    );

    if !activate {
        return Ok(());
    }

    // 3. Replace the main slot with the new project
    let slots = SlotManager::new(layout);
    if let Some(previous) = slots.index().active_project(true)? {
        slots
            .unlink_main()
            .with_context(|| format!("Failed to unlink previous main '{}'", previous))?;
        println!("  Unlinked previous main '{}'", previous.magenta());
    }

    let slot = slots
        .link_project(&path, true, LinkOptions::default())
        .with_context(|| format!("Failed to activate '{}'", name))?;
    println!(
        "{} Linked '{}' → {}",
        "✓".green(),
        name.magenta(),
        slot.display().to_string().cyan()
    );

    Ok(())
}
