//! Show version information

use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    println!("{} {}", "dirman".bold(), env!("CARGO_PKG_VERSION"));
    println!("Project directory manager: one main slot, any number of auxiliary slots.");
    println!(
        "{}",
        "Slots are symlinks named current_project and project_<NAME>.".dimmed()
    );
    Ok(())
}
