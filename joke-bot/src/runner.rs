//! Task runner: validate config, init logging, build the router, and feed it tasks.

use std::borrow::Cow;

use anyhow::Result;
use jbot_core::{init_tracing, Task};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, info_span, instrument, warn, Instrument};

use crate::config::BotConfig;
use crate::router::CommandRouter;

/// Validates config, initializes tracing, and builds the OpenRouter-backed router.
/// Warns (does not fail) when no API key is configured.
pub fn prepare_router(config: &BotConfig) -> Result<CommandRouter> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        agent = %config.agent().name,
        api_url = %config.openrouter().api_url,
        model = %config.openrouter().model,
        "Initializing bot"
    );
    if !config.openrouter().has_api_key() {
        warn!("OPENROUTER_API_KEY is not set; humor_me will answer with the apology joke");
    }

    CommandRouter::from_config(config.openrouter().clone())
}

/// Reads tasks line by line from `reader` and writes one reply line per task to `writer`.
/// Each task runs in its own span carrying the task id. Returns the number of tasks processed.
///
/// A line that is not valid UTF-8 is still answered: invalid bytes become U+FFFD.
pub async fn run_lines<R, W>(router: &CommandRouter, mut reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut processed = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!(line = processed + 1, "input line is not valid UTF-8, replacing invalid bytes");
        }

        let task = Task::new(line.into_owned());
        let span = info_span!("task", task_id = %task.id, received_at = %task.received_at);
        let reply = router.process(&task.content).instrument(span).await;
        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        processed += 1;
    }

    Ok(processed)
}

/// Main entry for `jbot run`: prepare the router and serve stdin until EOF.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let router = prepare_router(&config)?;
    info!("Starting dad jokes...");

    let processed = run_lines(
        &router,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!(processed, "stdin closed, stopping");
    Ok(())
}
