//! Command parsing: normalize raw task text and split it into a command name and arguments.

/// A parsed command. `name` and `args` come from the lowercased text; `text` keeps the original
/// casing for echoing back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// First whitespace-delimited token, lowercased.
    pub name: String,
    /// Remaining tokens, lowercased. Currently unused by every handler.
    pub args: Vec<String>,
    /// Trimmed input with one leading `/` removed, case preserved.
    pub text: String,
}

/// Trims surrounding whitespace, then strips a single leading `/`. The result is not re-trimmed.
pub fn normalize(task: &str) -> &str {
    let trimmed = task.trim();
    trimmed.strip_prefix('/').unwrap_or(trimmed)
}

impl Command {
    /// Parses a raw task. Returns None when the normalized text has no tokens.
    pub fn parse(task: &str) -> Option<Self> {
        let text = normalize(task);
        let lower = text.to_lowercase();
        let mut tokens = lower.split_whitespace().map(str::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
            text: text.to_string(),
        })
    }

    /// True when the command name equals `name` (already lowercase).
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}
