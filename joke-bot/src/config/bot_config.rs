//! BotConfig: BaseConfig + OpenRouterConfig + AgentInfo. Use load() for env-based loading.

use anyhow::Result;
use joke_client::OpenRouterConfig;

use super::{AgentInfo, BaseConfig};

/// Bot config. Environment is read once here; nothing downstream reads env ad hoc.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub openrouter: OpenRouterConfig,
    pub agent: AgentInfo,
}

impl BotConfig {
    /// Load full config from environment variables.
    /// Call validate() after load to check config before init.
    pub fn load() -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load()?,
            openrouter: OpenRouterConfig::from_env(),
            agent: AgentInfo::default(),
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    /// A missing API key is allowed; only `humor_me` depends on it.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.openrouter.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn openrouter(&self) -> &OpenRouterConfig {
        &self.openrouter
    }
    pub fn agent(&self) -> &AgentInfo {
        &self.agent
    }
}
