//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "jbot")]
#[command(about = "Dad joke bot: route a text command, fetch a joke for humor_me", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Process one task and print the reply (words are joined with spaces).
    Ask {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        task: Vec<String>,
    },
    /// Read tasks from stdin, one per line, and print one reply per line until EOF.
    Run,
    /// Print agent name, description, capabilities and commands.
    Info,
}

/// Load BotConfig from environment (call after `dotenvy::dotenv()`).
pub fn load_config() -> Result<BotConfig> {
    BotConfig::load()
}
