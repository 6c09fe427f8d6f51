use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod config;
pub mod init_config;
pub mod logging;
pub mod replay;
pub mod version;
pub mod weight;

use config::{default_config_path, ReputeConfig};

#[derive(Parser)]
#[command(name = "repute")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operator CLI for the repute governance ledger", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.local/share/repute/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a TOML transaction script through a fresh ledger
    Replay {
        /// Path to the script
        script: String,

        /// Print one JSON object per step
        #[arg(long)]
        json: bool,

        /// Print the event journal after the replay
        #[arg(long)]
        journal: bool,
    },

    /// Show the voting weight for a reputation value
    Weight {
        reputation: u64,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}

pub async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Replay {
            script,
            json,
            journal,
        } => {
            let config = ReputeConfig::load_or_default(&config_path)?;
            logging::init(&config.logging)?;
            replay::execute(&PathBuf::from(script), &config, json, journal).await
        }
        Commands::Weight { reputation } => {
            weight::execute(reputation);
            Ok(())
        }
        Commands::InitConfig { force } => init_config::execute(&config_path, force),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
