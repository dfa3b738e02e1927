//! # Joke bot application
//!
//! Wires jbot-core, handler-chain, joke-handlers and joke-client. Loads config from env and
//! feeds tasks to the [`CommandRouter`] from the CLI (`ask`) or from stdin (`run`).

pub mod cli;
pub mod config;
pub mod router;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{AgentInfo, BaseConfig, BotConfig};
pub use router::{reply_for, CommandRouter};
pub use runner::{prepare_router, run_bot, run_lines};
