//! # Joke handlers
//!
//! Command handlers for the joke bot: [`HumorMeHandler`] fetches a joke for `humor_me`,
//! [`FallbackHandler`] answers everything else with the NLP placeholder. Fixed reply texts
//! live in [`replies`].

mod fallback;
mod humor_me;
pub mod replies;

pub use fallback::FallbackHandler;
pub use humor_me::HumorMeHandler;
pub use replies::{
    available_commands, placeholder_reply, APOLOGY_JOKE, HUMOR_ME_COMMAND, NO_COMMAND_REPLY,
    NLP_PLACEHOLDER_PREFIX,
};
