//! Error Handling Module
//!
//! Configuration problems are reported synchronously, before any network
//! activity. Transport failures are mapped to [`LlmError::HttpError`] exactly
//! once (inside the reqwest transport) and propagate unchanged from there;
//! nothing above the transport retries or reinterprets them.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum LlmError {
    /// HTTP/transport error (DNS failure, connection refused, body read
    /// failure, ...). Raised by the transport, never recovered from here.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The API returned a non-success status code.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        /// Parsed response body, when it was valid JSON.
        details: Option<serde_json::Value>,
    },

    /// Response (or request) JSON could not be serialized/deserialized.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key was required but not provided.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Invalid or missing configuration value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A parameter failed validation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
