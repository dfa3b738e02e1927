//! Fixed reply texts.

/// The only command with a real handler.
pub const HUMOR_ME_COMMAND: &str = "humor_me";

/// Reply for input with no tokens.
pub const NO_COMMAND_REPLY: &str = "No command provided. Available commands: humor_me";

/// Reply whenever dispatch fails, whatever the cause.
pub const APOLOGY_JOKE: &str = "I tried to think of a joke, but I got an error instead. Why did the server break up with the network? Because it couldn't find a connection.";

pub const NLP_PLACEHOLDER_PREFIX: &str = "NLP processing not yet implemented. Received: ";

/// Placeholder for unrecognized commands; `text` is echoed verbatim.
pub fn placeholder_reply(text: &str) -> String {
    format!("{}{}", NLP_PLACEHOLDER_PREFIX, text)
}

/// Commands the bot understands, in display order.
pub fn available_commands() -> &'static [&'static str] {
    &[HUMOR_ME_COMMAND]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_reply_lists_available_commands() {
        assert!(NO_COMMAND_REPLY.ends_with(&available_commands().join(", ")));
    }

    #[test]
    fn test_placeholder_reply_echoes_text() {
        assert_eq!(
            placeholder_reply("What's the Weather?"),
            "NLP processing not yet implemented. Received: What's the Weather?"
        );
    }
}
