//! DTOs for the message endpoint.
//!
//! Requests mirror the messages a mail client UI sends to its background
//! worker: a JSON object tagged by `type`. Replies are a flat `{ok, ...}`
//! object with camelCase keys; absent fields are omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::{ComposeTarget, OperationResult};
use crate::utils::selection::{HTTP_URL_REGEX, Selection};

/// A request to the client core.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    CheckConnection,
    ShortenUrl(ShortenMessage),
    GetStats(ShortUrlMessage),
    #[serde(rename = "DELETE_SHORTURL")]
    DeleteShortUrl(ShortUrlMessage),
    GetSettings,
    ClassifySelection(SelectionMessage),
    /// Any other `type`. Answered with `{ok: false}`.
    #[serde(other)]
    Unknown,
}

/// Payload of `SHORTEN_URL`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenMessage {
    /// The URL to shorten (must start with `http://` or `https://`).
    #[validate(regex(path = *HTTP_URL_REGEX, message = "Invalid URL format"))]
    pub long_url: String,

    pub keyword: Option<String>,

    pub title: Option<String>,

    /// Compose window to insert the result into, echoed in the reply.
    pub tab_id: Option<ComposeTarget>,
}

/// Payload of `GET_STATS` and `DELETE_SHORTURL`: a short URL or bare keyword.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlMessage {
    pub short_url: String,
}

/// Payload of `CLASSIFY_SELECTION`.
#[derive(Debug, Deserialize)]
pub struct SelectionMessage {
    pub text: String,
}

/// Reply to every message.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub already: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_copy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<ComposeTarget>,
}

impl Reply {
    pub fn success() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn with_tab_id(mut self, tab_id: Option<ComposeTarget>) -> Self {
        self.tab_id = tab_id;
        self
    }
}

impl Reply {
    /// Builds a reply from any outcome; `fill` adds the success payload.
    fn from_outcome<T>(outcome: OperationResult<T>, fill: impl FnOnce(Self, T) -> Self) -> Self {
        match outcome {
            OperationResult::Success(value) => fill(Self::success(), value),
            OperationResult::AlreadyExists { short_url } => Self {
                short_url,
                already: Some(true),
                ..Self::success()
            },
            OperationResult::Failure(failure) => Self::failure(failure.reason),
        }
    }
}

impl From<OperationResult<u64>> for Reply {
    fn from(outcome: OperationResult<u64>) -> Self {
        Self::from_outcome(outcome, |reply, total| Self {
            total: Some(total),
            ..reply
        })
    }
}

impl From<OperationResult<String>> for Reply {
    fn from(outcome: OperationResult<String>) -> Self {
        Self::from_outcome(outcome, |reply, short_url| Self {
            short_url: Some(short_url),
            already: Some(false),
            ..reply
        })
    }
}

impl From<OperationResult<Value>> for Reply {
    fn from(outcome: OperationResult<Value>) -> Self {
        Self::from_outcome(outcome, |reply, data| Self {
            data: Some(data),
            ..reply
        })
    }
}

impl From<OperationResult<()>> for Reply {
    fn from(outcome: OperationResult<()>) -> Self {
        Self::from_outcome(outcome, |reply, ()| reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::Failure;
    use serde_json::json;

    #[test]
    fn test_message_tags() {
        let message: Message = serde_json::from_value(json!({"type": "CHECK_CONNECTION"})).unwrap();
        assert!(matches!(message, Message::CheckConnection));

        let message: Message =
            serde_json::from_value(json!({"type": "DELETE_SHORTURL", "shortUrl": "abc"})).unwrap();
        assert!(matches!(message, Message::DeleteShortUrl(m) if m.short_url == "abc"));

        let message: Message = serde_json::from_value(json!({"type": "OPEN_POPUP"})).unwrap();
        assert!(matches!(message, Message::Unknown));
    }

    #[test]
    fn test_shorten_message_fields() {
        let message: Message = serde_json::from_value(json!({
            "type": "SHORTEN_URL",
            "longUrl": "https://example.com",
            "keyword": "ex",
            "tabId": 12
        }))
        .unwrap();

        let Message::ShortenUrl(shorten) = message else {
            panic!("expected SHORTEN_URL");
        };
        assert_eq!(shorten.long_url, "https://example.com");
        assert_eq!(shorten.keyword.as_deref(), Some("ex"));
        assert!(shorten.title.is_none());
        assert_eq!(shorten.tab_id, Some(ComposeTarget::new(12)));
        assert!(shorten.validate().is_ok());
    }

    #[test]
    fn test_shorten_message_rejects_non_http_url() {
        let shorten = ShortenMessage {
            long_url: "mailto:someone@example.com".to_string(),
            keyword: None,
            title: None,
            tab_id: None,
        };
        assert!(shorten.validate().is_err());
    }

    #[test]
    fn test_already_exists_reply() {
        let reply = Reply::from(OperationResult::<String>::AlreadyExists {
            short_url: Some("https://sho.rt/abc".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"ok": true, "shortUrl": "https://sho.rt/abc", "already": true})
        );
    }

    #[test]
    fn test_success_replies_carry_payload() {
        assert_eq!(
            serde_json::to_value(Reply::from(OperationResult::Success(17u64))).unwrap(),
            json!({"ok": true, "total": 17})
        );
        assert_eq!(
            serde_json::to_value(Reply::from(OperationResult::Success(json!({"link": {}})))).unwrap(),
            json!({"ok": true, "data": {"link": {}}})
        );
        assert_eq!(
            serde_json::to_value(Reply::from(OperationResult::Success(()))).unwrap(),
            json!({"ok": true})
        );
    }

    #[test]
    fn test_failure_reply_omits_empty_fields() {
        let reply = Reply::from(OperationResult::<()>::Failure(Failure::keyword_required()));

        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"ok": false, "reason": "keyword required"})
        );
    }

    #[test]
    fn test_selection_reply_shape() {
        let reply = Reply {
            selection: Some(Selection::Short("https://sho.rt/abc".to_string())),
            ..Reply::success()
        };

        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"ok": true, "selection": {"kind": "short", "url": "https://sho.rt/abc"}})
        );
    }
}
