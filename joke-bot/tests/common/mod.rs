//! Shared test helpers: stub joke source and tracing init.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use jbot_core::{FetchError, JokeSource};

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once so router logs show up with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// Joke source with a fixed outcome and a call counter.
pub struct StubJokeSource {
    joke: Option<String>,
    pub calls: AtomicUsize,
}

impl StubJokeSource {
    pub fn ok(joke: &str) -> Arc<Self> {
        Arc::new(Self {
            joke: Some(joke.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            joke: None,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl JokeSource for StubJokeSource {
    async fn fetch_joke(&self) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.joke
            .clone()
            .ok_or_else(|| FetchError::Transport("connection refused".to_string()))
    }
}
