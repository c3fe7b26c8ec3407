//! Databricks Provider Module
//!
//! Thin wrapper around the OpenAI-compatible client: the compatible client
//! keeps issuing requests to `{base_url}/chat/completions`, and
//! [`InvocationsTransport`] redirects them to the `/invocations` path that
//! Databricks serving endpoints expect. Everything else about the request
//! passes through unchanged.
//!
//! # Architecture
//! - `url.rs`       - URL rewrite and base-URL normalization
//! - `transport.rs` - transport decorator applying the rewrite
//! - `config.rs`    - provider configuration
//! - `builder.rs`   - builder and `create_provider*` factories
//!
//! # Example Usage
//! ```rust,no_run
//! use databricks_provider::{ChatMessage, ChatRequest, DatabricksBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DatabricksBuilder::new()
//!         .api_key("dapi-...")
//!         .base_url("https://workspace.cloud.databricks.com/serving-endpoints/my-model")
//!         .build()?;
//!
//!     let request = ChatRequest {
//!         model: "my-model".into(),
//!         messages: vec![ChatMessage::user("Hello, Databricks!")],
//!         ..Default::default()
//!     };
//!     let response = client.chat(&request).await?;
//!     println!("{}", response.content_text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod transport;
pub mod url;

pub use builder::{
    API_KEY_VAR, BASE_URL_VAR, DatabricksBuilder, create_provider, create_provider_from_env,
    create_provider_from_vars,
};
pub use config::{DEFAULT_PROVIDER_NAME, DatabricksConfig};
pub use transport::InvocationsTransport;
pub use url::{normalize_base_url, rewrite_invocations_url};

use crate::error::LlmError;
use crate::standards::openai::OpenAiCompatibleClient;
use crate::standards::openai::types::{ChatRequest, ChatResponse};

/// Databricks chat client.
///
/// Stateless across requests; safe to share and use concurrently. Requests
/// issued through it are independent and their ordering is unspecified.
#[derive(Debug, Clone)]
pub struct DatabricksClient {
    inner: OpenAiCompatibleClient,
}

impl DatabricksClient {
    pub(crate) fn new(inner: OpenAiCompatibleClient) -> Self {
        Self { inner }
    }

    /// Provider instance name (`"databricks"` unless overridden).
    pub fn provider_name(&self) -> &str {
        self.inner.provider_id()
    }

    /// Normalized serving-endpoint base URL.
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Execute a non-streaming chat request against the serving endpoint.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.inner.chat(request).await
    }
}
