//! Raw HTTP response of the short link service, before classification.

use serde_json::Value;

/// Status, body and (if the body is valid JSON) the parsed payload.
///
/// Produced by a [`crate::domain::ports::Transport`] and consumed by the
/// normalizer. A body that is not JSON is not an error; `json` is simply `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawApiResponse {
    pub status: u16,
    pub body: String,
    pub json: Option<Value>,
}

impl RawApiResponse {
    /// Creates a response and parses the body as JSON when possible.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let json = serde_json::from_str(&body).ok();
        Self { status, body, json }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the first `max_chars` characters of the body.
    pub fn snippet(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }

    /// Formats a generic `HTTP {status}: {snippet}` failure reason.
    ///
    /// The snippet part is omitted for an empty body.
    pub fn http_failure_reason(&self, max_chars: usize) -> String {
        if self.body.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            format!("HTTP {}: {}", self.status, self.snippet(max_chars))
        }
    }
}
