//! Databricks client configuration.
//!
//! Intentionally minimal: a base URL, an API key, optional extra headers, and
//! a provider name. Base-URL normalization happens at build time; no other
//! validation is performed here.

use secrecy::SecretString;
use std::collections::HashMap;

/// Provider name used when the caller does not supply one.
pub const DEFAULT_PROVIDER_NAME: &str = "databricks";

/// Configuration for a Databricks serving-endpoint provider.
#[derive(Clone)]
pub struct DatabricksConfig {
    pub api_key: SecretString,
    /// Serving-endpoint URL, typically
    /// `https://{workspace}/serving-endpoints/{model}`. A trailing
    /// `/invocations` is tolerated and stripped at build time.
    pub base_url: String,
    /// Extra request headers merged into every request.
    pub headers: HashMap<String, String>,
    /// Provider instance name.
    pub provider_name: String,
}

impl std::fmt::Debug for DatabricksConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabricksConfig")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

impl DatabricksConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: base_url.into(),
            headers: HashMap::new(),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }
}
