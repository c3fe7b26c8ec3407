//! databricks-provider
//!
//! Adapts a generic OpenAI-compatible chat-completions client to Databricks
//! model-serving endpoints. Two cooperating pieces, both stateless:
//!
//! - a URL-rewriting transport that redirects requests aimed at
//!   `/chat/completions` to `/invocations`, the path Databricks expects;
//! - provider factories that normalize configuration (stripping an accidental
//!   trailing `/invocations` from the base URL) and construct the client with
//!   the rewriting transport installed.
//!
//! Transport failures propagate to the caller unchanged; only the
//! environment-based factory performs configuration checks (`API_KEY`,
//! `BASE_URL`), and it fails fast before any network activity.
#![deny(unsafe_code)]

pub mod error;
pub mod execution;
pub mod providers;
pub mod standards;

pub use error::LlmError;
pub use execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};
pub use providers::databricks::{
    DatabricksBuilder, DatabricksClient, DatabricksConfig, create_provider,
    create_provider_from_env, create_provider_from_vars,
};
pub use standards::openai::types::{ChatMessage, ChatRequest, ChatResponse};
