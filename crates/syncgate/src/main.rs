//! SyncGate - Entry Point
//!
//! Runs one sync over the configured stores and prints the outcome.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `syncgate` | Sync with `syncgate.toml` from the default locations |
//! | `syncgate --config <path>` | Sync with an explicit configuration file |
//! | `syncgate --json` | Print the outcome as JSON |

use clap::Parser;
use std::process::ExitCode;
use syncgate::cli::run;

/// Command line interface for SyncGate
#[derive(Parser, Debug)]
#[command(name = "syncgate")]
#[command(about = "SyncGate - Synchronize the configured stores once")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Exits non-zero when any store failed to synchronize
#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let success = run(cli.config.as_deref(), cli.json).await?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
