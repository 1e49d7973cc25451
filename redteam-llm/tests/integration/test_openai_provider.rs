//! Integration tests for OpenAIProvider using wiremock

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use redteam_llm::{CompletionRequest, LlmError, LlmProvider, OpenAIProvider};

#[tokio::test]
async fn test_openai_complete_success() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Key Findings\n- none" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18 }
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider =
        OpenAIProvider::new("test-key", "gpt-4o").with_base_url(format!("{}/v1", mock_server.uri()));

    let response = provider
        .complete(CompletionRequest::new().with_system("sys").with_user("hi"))
        .await
        .unwrap();

    assert_eq!(response.text(), "Key Findings\n- none");
    assert_eq!(response.usage.total_tokens, 18);
}

#[tokio::test]
async fn test_openai_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_string("max_tokens too large"))
        .mount(&mock_server)
        .await;

    let err = OpenAIProvider::new("k", "gpt-4o")
        .with_base_url(format!("{}/v1", mock_server.uri()))
        .complete(CompletionRequest::new().with_user("hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::InvalidRequest(_)));
    assert!(!err.is_retryable());
}
