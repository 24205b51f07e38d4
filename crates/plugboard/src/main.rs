//! plugboard - Entry Point
//!
//! Inspects the provider wiring a configuration produces and sends test
//! messages through the SMS providers.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `plugboard types` | Registered provider types and data parsers |
//! | `plugboard providers [--group G]` | Configured or discovered providers |
//! | `plugboard settings [--provider P]` | Provider-wide or per-provider settings |
//! | `plugboard send --provider P --to N --message M` | Send one SMS |

// Force-link plugboard-providers so its linkme registrations are included
extern crate plugboard_providers;

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugboard_infrastructure::ConfigLoader;
use plugboard_infrastructure::logging::init_logging;

use commands::Output;

/// Command line interface for plugboard
#[derive(Parser, Debug)]
#[command(name = "plugboard")]
#[command(about = "plugboard - Inspect and exercise provider wiring")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered provider types and data parsers
    Types,
    /// List the providers the configuration produces
    Providers {
        /// Only list providers in this group
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Show provider-wide settings, or the settings of one provider
    Settings {
        /// Provider name
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Send a message through an SMS provider
    Send {
        /// Provider name
        #[arg(short, long)]
        provider: String,
        /// Recipient
        #[arg(long)]
        to: String,
        /// Message body
        #[arg(short, long)]
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let output = Output::new(cli.json);
    match cli.command {
        Commands::Types => commands::types(&output),
        Commands::Providers { group } => commands::providers(&output, &config, group.as_deref()),
        Commands::Settings { provider } => {
            commands::settings(&output, &config, provider.as_deref())
        }
        Commands::Send {
            provider,
            to,
            message,
        } => commands::send(&output, &config, &provider, &to, &message),
    }
}
