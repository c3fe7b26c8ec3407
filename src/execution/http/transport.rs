//! HTTP transport abstraction.
//!
//! This module aligns with the Vercel AI SDK concept of providing a
//! "custom fetch" implementation per provider. In Rust, we expose this as an
//! injectable transport that performs a single JSON POST and returns the raw
//! response. The transport is the seam where outgoing URLs can be observed and
//! rewritten.

use crate::error::LlmError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Custom HTTP transport for JSON requests.
///
/// Scoped to non-streaming JSON POST requests. Exactly one network call per
/// `execute_json` invocation; no retry, no timeout beyond what the underlying
/// client imposes.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError>;
}

/// Default transport backed by a `reqwest::Client`.
///
/// This is the only place where transport failures are mapped into
/// [`LlmError::HttpError`]; callers above this layer see them unchanged.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?
            .to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}
