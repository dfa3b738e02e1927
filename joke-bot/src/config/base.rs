//! Base config: logging only. Loaded from env.

use anyhow::{bail, Result};
use std::env;

/// Default log file path when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/joke-bot.log";

/// Base config: log file location.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables.
    pub fn load() -> Result<Self> {
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self { log_file })
    }

    /// Validate config (log file path must not be blank).
    pub fn validate(&self) -> Result<()> {
        if self.log_file.trim().is_empty() {
            bail!("LOG_FILE is set but empty");
        }
        Ok(())
    }
}
