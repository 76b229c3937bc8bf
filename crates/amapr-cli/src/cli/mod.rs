//! CLI for the AmapRedirect pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_log, run_redirect, run_resolve};

/// Top-level CLI for AmapRedirect.
#[derive(Debug, Parser)]
#[command(name = "amapr")]
#[command(about = "AmapRedirect: turn Google Maps links into Amap requests", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/amapr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a map URI and show the destination it names.
    Resolve {
        /// google.navigation:, geo: or Google Maps http(s) URI.
        uri: String,

        /// Print the destination as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the full redirect pipeline and print the Amap URI.
    Redirect {
        /// google.navigation:, geo: or Google Maps http(s) URI.
        uri: String,

        /// Intent action; only VIEW intents (and navigation URIs) are intercepted.
        #[arg(long, default_value = amapr_core::redirect::ACTION_VIEW)]
        action: String,

        /// Navigation mode token, overriding nav_mode from the config.
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and current settings.
    Config,

    /// Print the redirect log.
    Log {
        /// Truncate the log instead of printing it.
        #[arg(long)]
        clear: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config = cli.config.as_deref();

        match cli.command {
            CliCommand::Resolve { uri, json } => run_resolve(&uri, json)?,
            CliCommand::Redirect {
                uri,
                action,
                mode,
                json,
            } => run_redirect(config, &uri, &action, mode.as_deref(), json)?,
            CliCommand::Config => run_config(config)?,
            CliCommand::Log { clear } => run_log(clear)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
