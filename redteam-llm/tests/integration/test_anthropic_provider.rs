//! Integration tests for AnthropicProvider using wiremock

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use redteam_llm::{AnthropicProvider, CompletionRequest, LlmError, LlmProvider};

fn messages_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-opus-20240229",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 42, "output_tokens": 7 }
    })
}

#[tokio::test]
async fn test_anthropic_complete_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-3-opus-20240229",
            "max_tokens": 2000,
            "system": "You are a red team analyst.",
            "messages": [{ "role": "user", "content": "Plan an attack." }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_reply("{\"ok\":true}")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new("test-key", "claude-3-opus-20240229")
        .with_base_url(format!("{}/v1", mock_server.uri()));

    let response = provider
        .complete(
            CompletionRequest::new()
                .with_system("You are a red team analyst.")
                .with_user("Plan an attack.")
                .with_max_tokens(2000)
                .with_temperature(0.7),
        )
        .await
        .unwrap();

    assert_eq!(response.text(), "{\"ok\":true}");
    assert_eq!(response.usage.prompt_tokens, 42);
    assert_eq!(response.usage.completion_tokens, 7);
}

#[tokio::test]
async fn test_anthropic_rate_limited_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "12")
                .set_body_string("rate_limit_error"),
        )
        .mount(&mock_server)
        .await;

    let provider =
        AnthropicProvider::new("test-key", "m").with_base_url(format!("{}/v1", mock_server.uri()));

    let err = provider
        .complete(CompletionRequest::new().with_user("hi"))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(12)));
}

#[tokio::test]
async fn test_anthropic_auth_and_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "bad-key"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "good-key"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded_error"))
        .mount(&mock_server)
        .await;

    let base = format!("{}/v1", mock_server.uri());

    let err = AnthropicProvider::new("bad-key", "m")
        .with_base_url(&base)
        .complete(CompletionRequest::new().with_user("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Authentication(_)));

    let err = AnthropicProvider::new("good-key", "m")
        .with_base_url(&base)
        .complete(CompletionRequest::new().with_user("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ServiceUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_anthropic_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = AnthropicProvider::new("k", "m")
        .with_base_url(format!("{}/v1", mock_server.uri()))
        .complete(CompletionRequest::new().with_user("hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::InvalidResponse(_)));
}
