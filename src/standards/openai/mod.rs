//! OpenAI-Compatible Chat Client
//!
//! A minimal client for OpenAI-compatible chat-completions endpoints. It is
//! handed a provider name, base URL, API key, extra headers, and a transport,
//! and owns the request/response schema; provider modules treat it as opaque
//! and customize behavior only through the injected transport.

pub mod types;

use crate::error::LlmError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::transport::{HttpTransport, HttpTransportRequest};
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::Arc;
use types::{ChatRequest, ChatResponse};

/// Configuration for an OpenAI-compatible provider instance.
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    pub provider_id: String,
    pub base_url: String,
    pub api_key: SecretString,
    /// Extra request headers merged into every request.
    pub headers: HashMap<String, String>,
}

impl std::fmt::Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("provider_id", &self.provider_id)
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish()
    }
}

/// Client for OpenAI-compatible chat-completions endpoints.
///
/// Stateless across requests: every call builds its own headers and issues a
/// single request through the transport.
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    config: OpenAiCompatibleConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("provider_id", &self.config.provider_id)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl OpenAiCompatibleClient {
    /// Create a client. Header values are validated once here so that bad
    /// configuration fails at construction rather than on the first request.
    pub fn new(
        config: OpenAiCompatibleConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, LlmError> {
        let client = Self { config, transport };
        client.build_headers()?;
        Ok(client)
    }

    pub fn provider_id(&self) -> &str {
        &self.config.provider_id
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_headers(&self) -> Result<HeaderMap, LlmError> {
        Ok(HttpHeaderBuilder::new()
            .with_bearer_auth(self.config.api_key.expose_secret())?
            .with_json_content_type()
            .with_custom_headers(&self.config.headers)?
            .build())
    }

    /// Execute a non-streaming chat request.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let url = self.chat_url();
        let headers = self.build_headers()?;
        let body = serde_json::to_value(request)
            .map_err(|e| LlmError::ParseError(format!("Failed to serialize chat request: {e}")))?;

        tracing::debug!(provider_id = %self.config.provider_id, %url, "dispatching chat request");

        let result = self
            .transport
            .execute_json(HttpTransportRequest { url, headers, body })
            .await?;

        if !(200..300).contains(&result.status) {
            let text = String::from_utf8_lossy(&result.body);
            return Err(classify_http_error(
                &self.config.provider_id,
                result.status,
                &text,
            ));
        }

        serde_json::from_slice(&result.body)
            .map_err(|e| LlmError::ParseError(format!("Invalid chat response JSON: {e}")))
    }
}

/// Map a non-2xx response into an `ApiError`, surfacing the provider message
/// when the body carries one.
fn classify_http_error(provider_id: &str, status: u16, body: &str) -> LlmError {
    let details: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = details
        .as_ref()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| v.get("message"))
        })
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{provider_id} request failed with status {status}"));

    LlmError::ApiError {
        code: status,
        message,
        details,
    }
}
