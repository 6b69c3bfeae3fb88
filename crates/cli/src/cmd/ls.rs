//! List projects, most recently active first

use crate::util::{self, Style, Table};
use anyhow::{Context, Result};
use chrono::Local;
use dirman_core::{Layout, ProjectIndex};
use owo_colors::OwoColorize;

pub fn run(layout: &Layout) -> Result<()> {
    // 1. Enumerate projects
    let index = ProjectIndex::new(layout);
    let paths = index.list_project_paths().with_context(|| {
        format!(
            "Failed to list projects in {}",
            layout.project_root().display()
        )
    })?;

    if paths.is_empty() {
        println!(
            "{} {}",
            "No projects found in".dimmed(),
            layout.project_root().display()
        );
        return Ok(());
    }

    // 2. Resolve the main project for marking
    let active = index.active_project(true)?;

    // 3. Sort by activity, newest first
    let mut rows: Vec<_> = paths
        .into_iter()
        .map(|path| (util::activity_or_none(&path), path))
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));

    // 4. Display
    let now = Local::now();
    let mut table = Table::new(
        format!("Projects in {}", layout.project_root().display()),
        &[
            ("", Style::Plain),
            ("project", Style::Project),
            ("last activity", Style::Dim),
            ("", Style::Dim),
        ],
    );
    for (activity, path) in rows {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let marker = if active.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            ""
        };
        let (absolute, relative) = match activity {
            Some(ts) => (
                util::format_timestamp(&ts),
                util::format_relative_time(&ts, &now),
            ),
            None => ("-".to_string(), String::new()),
        };
        table.add_row(vec![marker.to_string(), name, absolute, relative]);
    }
    table.print();

    Ok(())
}
