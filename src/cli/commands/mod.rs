//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod coverage;
mod serve;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::dates::DayKey;

#[derive(Parser)]
#[command(name = "apod")]
#[command(about = "Browse NASA's Astronomy Picture of the Day nine days at a time")]
#[command(version)]
pub struct Cli {
    /// Feed location: http(s) URL, file:// URL or local path (overrides config file)
    #[arg(long, global = true, env = "APOD_FEED_URL")]
    feed: Option<String>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gallery web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        bind: Option<String>,
    },

    /// Print a nine-day window to the terminal
    Show {
        /// First day of the window (YYYY-MM-DD); defaults to the most recent days
        #[arg(short, long)]
        start: Option<DayKey>,

        /// Output the window as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the date range covered by the feed
    Coverage,

    /// Show the resolved configuration
    Config,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        feed: cli.feed,
    };
    let (settings, config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Show { start, json } => show::cmd_show(&settings, start, json).await,
        Commands::Coverage => coverage::cmd_coverage(&settings).await,
        Commands::Config => config_cmd::cmd_config(&settings, &config),
    }
}
