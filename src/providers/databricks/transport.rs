//! Invocations-rewriting transport.

use super::url::rewrite_invocations_url;
use crate::error::LlmError;
use crate::execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use async_trait::async_trait;
use std::borrow::Cow;
use std::sync::Arc;

/// Transport wrapper that redirects chat-completions URLs to the Databricks
/// `/invocations` path before delegating to the inner transport.
///
/// Headers and body pass through unmodified, and any error from the inner
/// transport propagates unchanged; no retry happens at this layer.
pub struct InvocationsTransport {
    inner: Arc<dyn HttpTransport>,
}

impl InvocationsTransport {
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpTransport for InvocationsTransport {
    async fn execute_json(
        &self,
        mut request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        if let Cow::Owned(rewritten) = rewrite_invocations_url(&request.url) {
            tracing::debug!(from = %request.url, to = %rewritten, "rewrote chat URL to invocations");
            request.url = rewritten;
        }
        self.inner.execute_json(request).await
    }
}
