//! Databricks builder and factory functions.
//!
//! Three entry points, all ending in the same place:
//! - [`DatabricksBuilder`] for fluent construction,
//! - [`create_provider`] for an explicit [`DatabricksConfig`],
//! - [`create_provider_from_env`] / [`create_provider_from_vars`] for
//!   environment-driven construction (`API_KEY` + `BASE_URL`).
//!
//! Environment access is isolated in `create_provider_from_env`; the checks
//! themselves live in the pure `create_provider_from_vars` so they can be
//! tested without mutating process state.

use super::config::{DEFAULT_PROVIDER_NAME, DatabricksConfig};
use super::transport::InvocationsTransport;
use super::url::normalize_base_url;
use super::DatabricksClient;
use crate::error::LlmError;
use crate::execution::http::transport::{HttpTransport, ReqwestTransport};
use crate::standards::openai::{OpenAiCompatibleClient, OpenAiCompatibleConfig};
use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::Arc;

/// Environment variable holding the Databricks API token.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the serving-endpoint base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Databricks client builder.
#[derive(Clone)]
pub struct DatabricksBuilder {
    api_key: SecretString,
    base_url: String,
    headers: HashMap<String, String>,
    provider_name: String,
    http_client: Option<reqwest::Client>,
    http_transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for DatabricksBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabricksBuilder {
    pub fn new() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: String::new(),
            headers: HashMap::new(),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            http_client: None,
            http_transport: None,
        }
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the serving-endpoint base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the provider instance name (defaults to `"databricks"`)
    pub fn provider_name<S: Into<String>>(mut self, name: S) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Add a custom header
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Replace all custom headers
    pub fn custom_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set a custom HTTP client for the default transport
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a custom HTTP transport; it still goes through the invocations
    /// URL rewrite.
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    /// Alias for `with_http_transport(...)` (Vercel-aligned: `fetch`).
    pub fn fetch(self, transport: Arc<dyn HttpTransport>) -> Self {
        self.with_http_transport(transport)
    }

    /// Build the Databricks client
    pub fn build(self) -> Result<DatabricksClient, LlmError> {
        let config = DatabricksConfig {
            api_key: self.api_key,
            base_url: self.base_url,
            headers: self.headers,
            provider_name: self.provider_name,
        };
        build_client(config, self.http_client, self.http_transport)
    }
}

/// Create a Databricks provider from an explicit configuration.
///
/// The base URL is normalized (one trailing `/invocations` stripped) and the
/// provider name defaults to `"databricks"` when empty; nothing else is
/// validated. A malformed base URL or API key surfaces later, when the
/// underlying request fails.
pub fn create_provider(config: DatabricksConfig) -> Result<DatabricksClient, LlmError> {
    build_client(config, None, None)
}

/// Create a Databricks provider from an explicit variable map.
///
/// Pure core of [`create_provider_from_env`]: requires non-empty
/// [`API_KEY_VAR`] and [`BASE_URL_VAR`] entries and fails fast, naming the
/// missing variable, before any transport is constructed.
pub fn create_provider_from_vars(
    vars: &HashMap<String, String>,
    name: Option<&str>,
) -> Result<DatabricksClient, LlmError> {
    let api_key = require_var(vars, API_KEY_VAR)?;
    let base_url = require_var(vars, BASE_URL_VAR)?;

    let mut config = DatabricksConfig::new(api_key, base_url);
    if let Some(name) = name {
        config = config.with_provider_name(name);
    }
    create_provider(config)
}

/// Create a Databricks provider from `API_KEY` and `BASE_URL` in the process
/// environment.
pub fn create_provider_from_env(name: Option<&str>) -> Result<DatabricksClient, LlmError> {
    let vars: HashMap<String, String> = std::env::vars().collect();
    create_provider_from_vars(&vars, name)
}

fn require_var<'a>(vars: &'a HashMap<String, String>, key: &str) -> Result<&'a str, LlmError> {
    match vars.get(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LlmError::ConfigurationError(format!(
            "{key} environment variable is not set"
        ))),
    }
}

fn build_client(
    config: DatabricksConfig,
    http_client: Option<reqwest::Client>,
    http_transport: Option<Arc<dyn HttpTransport>>,
) -> Result<DatabricksClient, LlmError> {
    let base_url = normalize_base_url(&config.base_url).to_string();
    let provider_name = if config.provider_name.is_empty() {
        DEFAULT_PROVIDER_NAME.to_string()
    } else {
        config.provider_name
    };

    let inner: Arc<dyn HttpTransport> = match http_transport {
        Some(transport) => transport,
        None => Arc::new(ReqwestTransport::new(http_client.unwrap_or_default())),
    };
    let transport = Arc::new(InvocationsTransport::new(inner));

    let client = OpenAiCompatibleClient::new(
        OpenAiCompatibleConfig {
            provider_id: provider_name,
            base_url,
            api_key: config.api_key,
            headers: config.headers,
        },
        transport,
    )?;

    Ok(DatabricksClient::new(client))
}
