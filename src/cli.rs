//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use subproject_sync::output::OutputConfig;

/// Subproject Sync - Mirror vendored subprojects and prune them to a selection
#[derive(Parser, Debug)]
#[command(name = "subproject-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the subprojects directory with the mirror and prune it
    Sync(commands::sync::SyncArgs),

    /// Show what a sync would use without changing anything
    Info(commands::info::InfoArgs),

    /// List subprojects whose folder name differs from their wrap name
    Aliases,

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &output),
            Commands::Info(args) => commands::info::execute(args, &output),
            Commands::Aliases => commands::aliases::execute(),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // Ignore a second initialisation (e.g. from tests).
    let _ = builder.try_init();
}
