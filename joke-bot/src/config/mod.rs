//! Bot configuration: BaseConfig (logging) + OpenRouterConfig (joke API) + AgentInfo (metadata).

mod agent;
mod base;
mod bot_config;


pub use agent::AgentInfo;
pub use base::BaseConfig;
pub use bot_config::BotConfig;
