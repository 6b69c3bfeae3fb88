//! Shared utilities for CLI commands

use chrono::{DateTime, Local};
use dirman_core::last_activity;
use owo_colors::OwoColorize;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format timestamp as absolute local time ("2024-01-03 14:30:00")
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Format timestamp as relative time ("2 hours ago")
pub fn format_relative_time(ts: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let seconds = now.signed_duration_since(*ts).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else if seconds < 604800 {
        format!("{} days ago", seconds / 86400)
    } else {
        format!("{} weeks ago", seconds / 604800)
    }
}

/// Last activity of a path, or `None` when it cannot be read
///
/// Display only; an unreadable project should not hide the others.
pub fn activity_or_none(path: &Path) -> Option<DateTime<Local>> {
    match last_activity(path, true) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read activity");
            None
        }
    }
}

/// Column style for [`Table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Name,
    Project,
    Dim,
}

/// Minimal aligned text table
pub struct Table {
    title: String,
    headers: Vec<&'static str>,
    styles: Vec<Style>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[(&'static str, Style)]) -> Self {
        Self {
            title: title.into(),
            headers: columns.iter().map(|(h, _)| *h).collect(),
            styles: columns.iter().map(|(_, s)| *s).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn print(&self) {
        let widths = self.widths();

        println!("{}", self.title.bold());
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<w$}", h.to_uppercase(), w = w))
            .collect();
        println!("{}", header.join("  ").bold());
        let rule: Vec<String> = widths.iter().map(|w| "━".repeat(*w)).collect();
        println!("{}", rule.join("  "));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(&self.styles)
                .map(|((cell, w), style)| {
                    let padded = format!("{:<w$}", cell, w = w);
                    match style {
                        Style::Plain => padded,
                        Style::Name => padded.blue().to_string(),
                        Style::Project => padded.magenta().to_string(),
                        Style::Dim => padded.dimmed().to_string(),
                    }
                })
                .collect();
            println!("{}", cells.join("  "));
        }
    }
}
