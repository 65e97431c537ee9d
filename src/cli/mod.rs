//! Command-line interface.

pub mod completions;
pub mod output;
pub mod params;
pub mod prompt;
pub mod setup;
pub mod show_config;
pub mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::error::{Result, StoreError};

/// USCIS case status notifier setup.
#[derive(Parser)]
#[command(
    name = "uscis-notifier",
    about = "Upload USCIS case status notifier secrets to AWS SSM Parameter Store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./notifier.toml, then the packaged copy)
    #[arg(short, long, global = true, env = "NOTIFIER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Prompt for secrets and upload them (default)
    Setup {
        /// Show what would be written without contacting AWS
        #[arg(long)]
        dry_run: bool,
    },

    /// List the parameters setup writes
    Params {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check which parameters exist in the store
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command. Runs setup when no command is given.
pub fn execute(command: Option<Command>, config: Option<PathBuf>) -> Result<()> {
    let path = config.as_deref();

    match command.unwrap_or(Command::Setup { dry_run: false }) {
        Command::Setup { dry_run } => setup::execute(&Config::load(path)?, dry_run),
        Command::Params { json } => params::execute(json),
        Command::Status { json } => status::execute(&Config::load(path)?, json),
        Command::Config => show_config::execute(&Config::load(path)?),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Build the runtime every store call runs on.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StoreError::Runtime(e).into())
}
