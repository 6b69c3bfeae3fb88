//! Link a project into a slot

use anyhow::{Context, Result};
use dirman_core::{Layout, LinkOptions, SlotManager};
use owo_colors::OwoColorize;

/// Flags controlling how an occupied slot is handled
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivateArgs {
    pub aux: bool,
    pub force: bool,
    pub keep_old_main: bool,
    pub allow_elsewhere: bool,
}

impl From<ActivateArgs> for LinkOptions {
    fn from(args: ActivateArgs) -> Self {
        LinkOptions {
            overwrite: args.force,
            keep_old_main: args.keep_old_main,
            ignore_existing_elsewhere: args.allow_elsewhere,
        }
    }
}

pub fn run(layout: &Layout, name: &str, args: ActivateArgs) -> Result<()> {
    // 1. Resolve the project directory
    let project = layout.project_path(name);
    let slots = SlotManager::new(layout);

    // 2. Remember what the main slot held, for reporting a promotion
    let previous_main = if args.aux {
        None
    } else {
        slots.index().active_project(true)?
    };

    // 3. Link
    let slot = slots
        .link_project(&project, !args.aux, args.into())
        .with_context(|| format!("Failed to activate '{}'", name))?;

    println!(
        "{} Linked '{}' → {}",
        "✓".green(),
        name.magenta(),
        slot.display().to_string().cyan()
    );

    if let Some(old) = previous_main.filter(|old| old != name) {
        if args.keep_old_main {
            let aux = layout.slot_path(&old, false);
            println!(
                "  Previous main '{}' kept at {}",
                old.magenta(),
                aux.display().to_string().cyan()
            );
        } else {
            println!("  Previous main '{}' unlinked", old.magenta());
        }
    }

    Ok(())
}
