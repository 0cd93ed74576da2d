//! HTTP-level tests for the direct Ollama fallback client.

use grundlag::api::ollama::{OllamaChatRequest, OllamaMessage, OllamaRole};
use grundlag::api::{ApiError, OllamaClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_request(content: &str) -> OllamaChatRequest {
    OllamaChatRequest {
        model: "mistral:7b".to_string(),
        messages: vec![OllamaMessage {
            role: OllamaRole::User,
            content: content.to_string(),
        }],
        stream: false,
        options: None,
    }
}

#[tokio::test]
async fn chat_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "mistral:7b",
            "message": {"role": "assistant", "content": "Hej!"},
            "done": true,
            "total_duration": 1_500_000_000u64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    let response = client.chat(chat_request("hej")).await.unwrap();

    assert_eq!(response.message.role, OllamaRole::Assistant);
    assert_eq!(response.message.content, "Hej!");
    assert!(response.done);
    assert_eq!(response.total_duration, Some(1_500_000_000));
}

#[tokio::test]
async fn chat_non_2xx_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    let err = client.chat(chat_request("hej")).await.unwrap_err();

    match err {
        ApiError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn chat_unreachable_daemon_is_network_error() {
    let client = OllamaClient::new("http://127.0.0.1:1");
    let err = client.chat(chat_request("hej")).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout(_)));
}

#[tokio::test]
async fn list_models_returns_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "models": [{"name": "mistral:7b"}, {"name": "llama3:8b"}]
        })))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    let models = client.list_models().await.unwrap();
    assert_eq!(models, vec!["mistral:7b", "llama3:8b"]);
    assert!(client.is_available().await);
}

#[tokio::test]
async fn no_models_means_not_available() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri());
    assert!(client.list_models().await.unwrap().is_empty());
    assert!(!client.is_available().await);
}

#[tokio::test]
async fn unreachable_daemon_is_not_available() {
    let client = OllamaClient::new("http://127.0.0.1:1");
    assert!(!client.is_available().await);
}
