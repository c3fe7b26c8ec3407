//! HTTP Headers Utility
//!
//! Common utilities for building request headers.

use crate::error::LlmError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// HTTP header builder for API requests
#[derive(Debug)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, LlmError> {
        let auth_value = format!("Bearer {token}");
        self.headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid API key format: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, LlmError> {
        for (key, value) in custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header name '{key}': {e}"))
            })?;
            self.headers.insert(
                header_name,
                HeaderValue::from_str(value).map_err(|e| {
                    LlmError::ConfigurationError(format!("Invalid header value '{value}': {e}"))
                })?,
            );
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_auth_and_content_type() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("secret-token")
            .unwrap()
            .with_json_content_type()
            .build();

        assert_eq!(headers[AUTHORIZATION], "Bearer secret-token");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn custom_headers_are_applied() {
        let extra = HashMap::from([("x-custom".to_string(), "value".to_string())]);
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&extra)
            .unwrap()
            .build();
        assert_eq!(headers["x-custom"], "value");
    }

    #[test]
    fn invalid_header_name_is_a_configuration_error() {
        let extra = HashMap::from([("bad header".to_string(), "v".to_string())]);
        let err = HttpHeaderBuilder::new()
            .with_custom_headers(&extra)
            .unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }
}
