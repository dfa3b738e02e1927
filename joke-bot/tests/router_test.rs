//! Integration tests for [`joke_bot::CommandRouter`].
//!
//! Router behavior is checked with a stub joke source (call counting) and end-to-end against a
//! mockito server standing in for OpenRouter.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{init_tracing, StubJokeSource};
use joke_bot::CommandRouter;
use joke_client::OpenRouterConfig;
use joke_handlers::{APOLOGY_JOKE, NO_COMMAND_REPLY};
use mockito::Server;

const PATH: &str = "/api/v1/chat/completions";

/// **Test: Empty and whitespace-only input yields the no-command reply without fetching.**
#[tokio::test]
async fn test_empty_input_returns_no_command_reply() {
    init_tracing();
    let source = StubJokeSource::ok("joke");
    let router = CommandRouter::new(source.clone());

    for input in ["", " ", "   \t  ", "\n", "/", "  /  "] {
        assert_eq!(router.process(input).await, NO_COMMAND_REPLY, "input {input:?}");
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

/// **Test: Casing, one leading slash and surrounding whitespace do not affect dispatch.**
#[tokio::test]
async fn test_humor_me_variants_dispatch_to_fetcher() {
    init_tracing();
    let source = StubJokeSource::ok("Why did the chicken cross the road?");
    let router = CommandRouter::new(source.clone());

    let inputs = ["humor_me", "/HUMOR_ME", "  /Humor_Me  ", "\thumor_ME extra args\n"];
    for input in inputs {
        assert_eq!(
            router.process(input).await,
            "Why did the chicken cross the road?",
            "input {input:?}"
        );
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), inputs.len());
}

/// **Test: Other commands echo the trimmed, slash-stripped, case-preserved text.**
#[tokio::test]
async fn test_other_commands_return_placeholder() {
    init_tracing();
    let source = StubJokeSource::ok("joke");
    let router = CommandRouter::new(source.clone());

    assert_eq!(
        router.process("  /Tell me a Joke about Computers  ").await,
        "NLP processing not yet implemented. Received: Tell me a Joke about Computers"
    );
    assert_eq!(
        router.process("Hi").await,
        "NLP processing not yet implemented. Received: Hi"
    );
    assert_eq!(
        router.process("//humor_me").await,
        "NLP processing not yet implemented. Received: /humor_me"
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

/// **Test: Any fetch failure becomes the apology; dispatch still exposes the typed error.**
#[tokio::test]
async fn test_fetch_failure_returns_apology() {
    init_tracing();
    let source = StubJokeSource::failing();
    let router = CommandRouter::new(source.clone());

    assert_eq!(router.process("/humor_me").await, APOLOGY_JOKE);
    assert!(router.dispatch("/humor_me").await.is_err());
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

/// **Test: A stub source shared behind Arc serves concurrent tasks independently.**
#[tokio::test]
async fn test_concurrent_tasks_are_independent() {
    init_tracing();
    let source = StubJokeSource::ok("joke");
    let router = Arc::new(CommandRouter::new(source.clone()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                router.process("humor_me").await
            } else {
                router.process(&format!("Task {i}")).await
            }
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let reply = handle.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(reply, "joke");
        } else {
            assert_eq!(
                reply,
                format!("NLP processing not yet implemented. Received: Task {i}")
            );
        }
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), 4);
}

/// **Test (end-to-end): no credential → apology and no request reaches the server.**
#[tokio::test]
async fn test_e2e_missing_credential_makes_no_request() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"unreachable"}}]}"#)
        .expect(0)
        .create_async()
        .await;

    let config = OpenRouterConfig::default().with_api_url(format!("{}{}", server.url(), PATH));
    let router = CommandRouter::from_config(config).unwrap();

    assert_eq!(router.process("  /Humor_Me  ").await, APOLOGY_JOKE);
    mock.assert_async().await;
}

/// **Test (end-to-end): successful completion is returned unmodified.**
#[tokio::test]
async fn test_e2e_success_returns_first_choice() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer sk-or-e2e-key-0000")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"Why did the chicken cross the road?"}}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let config = OpenRouterConfig::default()
        .with_api_url(format!("{}{}", server.url(), PATH))
        .with_api_key("sk-or-e2e-key-0000");
    let router = CommandRouter::from_config(config).unwrap();

    assert_eq!(
        router.process("humor_me").await,
        "Why did the chicken cross the road?"
    );
    mock.assert_async().await;
}

/// **Test (end-to-end): empty choices yields exactly "No joke found.".**
#[tokio::test]
async fn test_e2e_empty_choices() {
    init_tracing();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let config = OpenRouterConfig::default()
        .with_api_url(format!("{}{}", server.url(), PATH))
        .with_api_key("sk-or-e2e-key-0000");
    let router = CommandRouter::from_config(config).unwrap();

    assert_eq!(router.process("humor_me").await, "No joke found.");
}

/// **Test (end-to-end): non-200 status and malformed JSON both yield the apology.**
#[tokio::test]
async fn test_e2e_remote_failures_return_apology() {
    init_tracing();
    let mut server = Server::new_async().await;
    let config = OpenRouterConfig::default()
        .with_api_url(format!("{}{}", server.url(), PATH))
        .with_api_key("sk-or-e2e-key-0000");
    let router = CommandRouter::from_config(config).unwrap();

    let status_mock = server
        .mock("POST", PATH)
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit exceeded"}}"#)
        .expect(1)
        .create_async()
        .await;
    assert_eq!(router.process("humor_me").await, APOLOGY_JOKE);
    status_mock.assert_async().await;
    status_mock.remove_async().await;

    let json_mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("{\"choices\": [")
        .expect(1)
        .create_async()
        .await;
    assert_eq!(router.process("humor_me").await, APOLOGY_JOKE);
    json_mock.assert_async().await;
}
