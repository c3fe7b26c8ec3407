//! URL shaping for Databricks serving endpoints.
//!
//! Databricks serves models behind `.../serving-endpoints/{model}/invocations`
//! rather than the OpenAI `/chat/completions` path. Outgoing chat URLs are
//! rewritten on their way out, and base URLs already pointing at
//! `/invocations` are normalized back to the endpoint root so the compatible
//! client can append its own path segments without duplication.

use std::borrow::Cow;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const INVOCATIONS_PATH: &str = "/invocations";

/// Rewrite the first `/chat/completions` occurrence to `/invocations`.
///
/// URLs without the chat path, including already-rewritten ones, are returned
/// unchanged, which makes the rewrite idempotent. No other part of the string
/// is touched and no validation is performed.
pub fn rewrite_invocations_url(url: &str) -> Cow<'_, str> {
    if url.contains(CHAT_COMPLETIONS_PATH) {
        Cow::Owned(url.replacen(CHAT_COMPLETIONS_PATH, INVOCATIONS_PATH, 1))
    } else {
        Cow::Borrowed(url)
    }
}

/// Strip one trailing `/invocations` (with or without a trailing slash) from a
/// supplied base URL. Anything else passes through verbatim.
pub fn normalize_base_url(base_url: &str) -> &str {
    let trimmed = base_url.strip_suffix('/').unwrap_or(base_url);
    trimmed.strip_suffix(INVOCATIONS_PATH).unwrap_or(base_url)
}
