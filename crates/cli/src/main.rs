//! dirman command

use clap::Parser;
use cli_lib::Cli;
use owo_colors::OwoColorize;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; diagnostics go to stderr so stdout stays scriptable
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli_lib::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
