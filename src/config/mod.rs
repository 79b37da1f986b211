pub mod toml_config;

pub use toml_config::{GameConfig, MailerConfig, ScenarioConfig};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw a Secret Santa assignment that honors avoid lists and notify the givers")]
pub struct CliConfig {
    /// Path to the scenario TOML file
    #[arg(long, default_value = "scenario.toml")]
    pub scenario: String,

    /// Draw pairings without sending any notifications
    #[arg(long)]
    pub dry_run: bool,

    /// Seed for the random draw (omit for a fresh draw each run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the drawn pairings to a CSV file
    #[arg(long)]
    pub export: Option<String>,

    /// Suppress pairing and delivery logs
    #[arg(long)]
    pub silent: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
