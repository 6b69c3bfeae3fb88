//! Configuration display command

use anyhow::{Context, Result};
use dirman_core::config::{self, Config};
use dirman_core::Layout;
use owo_colors::OwoColorize;
use std::collections::HashMap;

/// Print the effective configuration as TOML
pub fn run(layout: &Layout) -> Result<()> {
    let rendered =
        toml::to_string(layout.config()).context("Failed to render configuration")?;

    match config_path() {
        Some(path) if path.exists() => {
            println!("{}", format!("# loaded from {}", path.display()).dimmed())
        }
        Some(path) => println!(
            "{}",
            format!("# {} not found, using defaults", path.display()).dimmed()
        ),
        None => println!("{}", "# no config location, using defaults".dimmed()),
    }
    print!("{}", rendered);

    Ok(())
}

/// Print where the config file is looked up
pub fn print_path() -> Result<()> {
    let path = config_path().context("Could not determine config file path")?;
    println!("{}", path.display());
    Ok(())
}

/// Print an annotated example config file
pub fn print_example() -> Result<()> {
    print!("{}", Config::example());
    Ok(())
}

fn config_path() -> Option<std::path::PathBuf> {
    let env: HashMap<String, String> = std::env::vars().collect();
    config::config_file_path(&env)
}
