//! Agent metadata shown to users and hosts.

use joke_handlers::available_commands;

/// Name, description and capabilities the agent advertises to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

impl Default for AgentInfo {
    fn default() -> Self {
        Self {
            name: "dad jokes".to_string(),
            description: "A great beginner-friendly agent is a Dad Joke Teller. Users send any message \
(e.g., \"Tell me a joke about computers\" or just \"Hi\"), and the agent responds with a \
groan-worthy, family-friendly dad joke."
                .to_string(),
            capabilities: vec!["humor".to_string(), "comedy".to_string()],
        }
    }
}

impl AgentInfo {
    /// Multi-line summary for `jbot info`.
    pub fn render(&self) -> String {
        format!(
            "Name: {}\nDescription: {}\nCapabilities: {}\nCommands: {}\n",
            self.name,
            self.description,
            self.capabilities.join(", "),
            available_commands().join(", ")
        )
    }
}
