//! Show managed slots and the projects they point at

use crate::util::{self, Style, Table};
use anyhow::{Context, Result};
use dirman_core::{Layout, ProjectIndex};
use owo_colors::OwoColorize;

pub fn run(layout: &Layout) -> Result<()> {
    // 1. Collect managed slots
    let index = ProjectIndex::new(layout);
    let entries = index.slot_entries().with_context(|| {
        format!(
            "Failed to read slots in {}",
            layout.symlink_root().display()
        )
    })?;

    if entries.is_empty() {
        println!("{}", "No active projects".dimmed());
        return Ok(());
    }

    // 2. Attach activity; the slot path follows the link into the project
    let mut rows: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let activity = util::activity_or_none(&entry.slot);
            (activity, entry)
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    // 3. Display
    let mut table = Table::new(
        "Active Projects",
        &[
            ("slot", Style::Name),
            ("project", Style::Project),
            ("last activity", Style::Dim),
        ],
    );
    for (activity, entry) in rows {
        table.add_row(vec![
            entry.slot_name(),
            entry.project_name(),
            activity
                .as_ref()
                .map(util::format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.print();

    Ok(())
}
