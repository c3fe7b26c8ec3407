//! End-to-end tests for the Databricks provider: requests built for
//! `/chat/completions` must arrive at `/invocations` with headers and body
//! otherwise intact.

use databricks_provider::{
    ChatMessage, ChatRequest, DatabricksBuilder, DatabricksConfig, LlmError, create_provider,
    create_provider_from_env,
};

fn chat_request() -> ChatRequest {
    ChatRequest {
        model: "my-model".into(),
        messages: vec![ChatMessage::user("hello")],
        ..Default::default()
    }
}

const CHAT_RESPONSE_BODY: &str = r#"{
    "id": "cmpl-1",
    "model": "my-model",
    "choices": [
        {"index": 0, "message": {"role": "assistant", "content": "hi"}, "finish_reason": "stop"}
    ],
    "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
}"#;

#[tokio::test]
async fn chat_request_lands_on_invocations_with_headers_and_body_intact() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/serving-endpoints/my-model/invocations")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .match_header("x-extra", "1")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "my-model",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CHAT_RESPONSE_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = DatabricksBuilder::new()
        .api_key("test-token")
        .base_url(format!("{}/serving-endpoints/my-model", server.url()))
        .header("x-extra", "1")
        .build()
        .unwrap();

    let response = client.chat(&chat_request()).await.unwrap();
    assert_eq!(response.content_text(), Some("hi"));
    mock.assert_async().await;
}

#[tokio::test]
async fn base_url_with_trailing_invocations_does_not_duplicate_the_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/serving-endpoints/my-model/invocations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CHAT_RESPONSE_BODY)
        .expect(1)
        .create_async()
        .await;

    let config = DatabricksConfig::new(
        "test-token",
        format!("{}/serving-endpoints/my-model/invocations", server.url()),
    );
    let client = create_provider(config).unwrap();
    assert!(client.base_url().ends_with("/serving-endpoints/my-model"));

    client.chat(&chat_request()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn api_errors_surface_the_provider_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/serving-endpoints/my-model/invocations")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "invalid model input"}"#)
        .create_async()
        .await;

    let client = DatabricksBuilder::new()
        .api_key("test-token")
        .base_url(format!("{}/serving-endpoints/my-model", server.url()))
        .build()
        .unwrap();

    let err = client.chat(&chat_request()).await.unwrap_err();
    match err {
        LlmError::ApiError { code, message, .. } => {
            assert_eq!(code, 400);
            assert_eq!(message, "invalid model input");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    // Nothing listens on the discard port; the connection failure must come
    // back as the transport's HttpError, not be retried or remapped.
    let client = DatabricksBuilder::new()
        .api_key("test-token")
        .base_url("http://127.0.0.1:9/serving-endpoints/my-model")
        .build()
        .unwrap();

    let err = client.chat(&chat_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::HttpError(_)));
}

#[test]
#[allow(unsafe_code)]
fn env_factory_checks_both_variables_before_any_network_activity() {
    // Single test for all process-environment cases to avoid interleaving
    // with other tests mutating the same variables.
    let saved_key = std::env::var("API_KEY").ok();
    let saved_url = std::env::var("BASE_URL").ok();

    unsafe {
        std::env::remove_var("API_KEY");
        std::env::set_var("BASE_URL", "https://host/serving-endpoints/m");
    }
    let err = create_provider_from_env(None).unwrap_err();
    assert!(matches!(err, LlmError::ConfigurationError(ref msg) if msg.contains("API_KEY")));

    unsafe {
        std::env::set_var("API_KEY", "test-token");
        std::env::remove_var("BASE_URL");
    }
    let err = create_provider_from_env(None).unwrap_err();
    assert!(matches!(err, LlmError::ConfigurationError(ref msg) if msg.contains("BASE_URL")));

    unsafe {
        std::env::set_var("BASE_URL", "https://host/serving-endpoints/m/invocations");
    }
    let client = create_provider_from_env(Some("databricks-test")).unwrap();
    assert_eq!(client.provider_name(), "databricks-test");
    assert_eq!(client.base_url(), "https://host/serving-endpoints/m");

    unsafe {
        match saved_key {
            Some(v) => std::env::set_var("API_KEY", v),
            None => std::env::remove_var("API_KEY"),
        }
        match saved_url {
            Some(v) => std::env::set_var("BASE_URL", v),
            None => std::env::remove_var("BASE_URL"),
        }
    }
}
