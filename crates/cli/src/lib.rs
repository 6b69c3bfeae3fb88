//! dirman CLI - switch the active project by swapping symlinks

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dirman_core::config::{self, Config};
use dirman_core::Layout;
use std::path::PathBuf;

pub mod cmd;
pub mod util;

/// dirman - Project directory and active-project symlink manager
#[derive(Debug, Parser)]
#[command(name = "dirman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding all projects (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Directory holding the slot symlinks (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    pub symlink_root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show active slots and all projects (default)
    Status,
    /// Show managed slots and what they point at
    Active,
    /// List projects, newest activity first
    Ls,
    /// Link a project into the main or an auxiliary slot
    Activate {
        /// Project directory name, e.g. AD-0012345
        name: String,
        /// Use the auxiliary slot project_<NAME> instead of current_project
        #[arg(long)]
        aux: bool,
        /// Replace whatever occupies the slot
        #[arg(short, long)]
        force: bool,
        /// When replacing the main slot, move the old main project to its auxiliary slot
        #[arg(long, requires = "force")]
        keep_old_main: bool,
        /// Link even if the project is already linked from another slot
        #[arg(long)]
        allow_elsewhere: bool,
    },
    /// Remove slot symlinks
    Deactivate {
        /// "main", "all", or a project name
        #[arg(default_value = "main")]
        target: String,
    },
    /// Create a new project directory with a README
    Create {
        /// Category codes, e.g. -p d -p a
        #[arg(short, long = "prefix", required = true, num_args = 1..)]
        prefixes: Vec<String>,
        /// Project title, written as the README heading
        #[arg(short, long)]
        title: String,
        /// Optional description for the README body
        #[arg(short, long, default_value = "")]
        description: String,
        /// Use this serial instead of a random one
        #[arg(long)]
        serial: Option<u32>,
        /// Do not make the new project the main project
        #[arg(long)]
        no_activate: bool,
    },
    /// Print category prefixes as JSON
    Prefixes {
        /// Include long descriptions
        #[arg(short, long)]
        long: bool,
    },
    /// Show version information
    About,
    /// Show configuration
    Config {
        /// Print the config file location
        #[arg(long, conflicts_with = "example")]
        path: bool,
        /// Print an example config file
        #[arg(long)]
        example: bool,
    },
}

impl Cli {
    /// Effective configuration: file, then environment, then flags
    ///
    /// Relative flag values are resolved against the working directory.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load().context("Failed to load configuration")?;
        if self.project_root.is_some() || self.symlink_root.is_some() {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            if let Some(root) = &self.project_root {
                config.project_root = config::resolve_relative(root, &cwd);
            }
            if let Some(root) = &self.symlink_root {
                config.symlink_root = config::resolve_relative(root, &cwd);
            }
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Execute the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    // Commands that never touch the filesystem skip config loading
    match &cli.command {
        Some(Commands::Prefixes { long }) => return cmd::prefixes::run(*long),
        Some(Commands::About) => return cmd::about::run(),
        Some(Commands::Config { path: true, .. }) => return cmd::config::print_path(),
        Some(Commands::Config { example: true, .. }) => return cmd::config::print_example(),
        _ => {}
    }

    let layout = Layout::new(cli.config()?);
    tracing::debug!(
        project_root = %layout.project_root().display(),
        symlink_root = %layout.symlink_root().display(),
        "resolved roots"
    );

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => cmd::status::run(&layout),
        Commands::Active => cmd::active::run(&layout),
        Commands::Ls => cmd::ls::run(&layout),
        Commands::Activate {
            name,
            aux,
            force,
            keep_old_main,
            allow_elsewhere,
        } => cmd::activate::run(
            &layout,
            &name,
            cmd::activate::ActivateArgs {
                aux,
                force,
                keep_old_main,
                allow_elsewhere,
            },
        ),
        Commands::Deactivate { target } => cmd::deactivate::run(&layout, &target),
        Commands::Create {
            prefixes,
            title,
            description,
            serial,
            no_activate,
        } => cmd::create::run(
            &layout,
            dirman_core::NewProject {
                prefixes,
                title,
                description,
                serial,
            },
            !no_activate,
        ),
        Commands::Prefixes { long } => cmd::prefixes::run(long),
        Commands::About => cmd::about::run(),
        Commands::Config { .. } => cmd::config::run(&layout),
    }
}
