//! Classification of `delete` replies.
//!
//! Plugins disagree on how a successful delete looks. Any of these counts:
//!
//! - `"status": "success"`
//! - a message like `"success: 'abc' deleted"`
//! - `"statusCode": 200`

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::fields::{as_count, message, non_empty_str, status};
use super::{ClassifyContext, Matcher, first_match};
use crate::domain::entities::{OperationResult, RawApiResponse};
use crate::domain::errors::Failure;

/// Body characters kept in generic failure reasons.
pub const SNIPPET_CHARS: usize = 200;

static DELETED_MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)success.*deleted").unwrap());

const CHAIN: [Matcher<()>; 2] = [deleted, rejected];

/// Classifies a `delete` reply.
pub fn classify(raw: &RawApiResponse, ctx: &ClassifyContext<'_>) -> OperationResult<()> {
    first_match(&CHAIN, raw, ctx)
        .unwrap_or_else(|| Failure::unrecognized(raw.http_failure_reason(SNIPPET_CHARS)).into())
}

/// Returns true if the payload uses any known success encoding.
pub fn is_delete_success(json: &Value) -> bool {
    status(json) == Some("success")
        || message(json).is_some_and(|text| DELETED_MESSAGE_REGEX.is_match(text))
        || json.get("statusCode").and_then(as_count) == Some(200)
}

/// 2xx with a success marker.
pub fn deleted(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<()>> {
    let json = raw.json.as_ref()?;
    (raw.is_success() && is_delete_success(json)).then_some(OperationResult::Success(()))
}

/// Failure carrying the service's `message` or `error` text.
pub fn rejected(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<()>> {
    let json = raw.json.as_ref()?;
    let text = message(json).or_else(|| json.get("error").and_then(non_empty_str))?;
    Some(Failure::remote_rejected(text).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FailureKind;
    use serde_json::json;

    fn ctx() -> ClassifyContext<'static> {
        ClassifyContext::new("https://sho.rt")
    }

    fn raw(status: u16, body: Value) -> RawApiResponse {
        RawApiResponse::new(status, body.to_string())
    }

    #[test]
    fn test_success_status_field() {
        let response = raw(200, json!({"status": "success"}));
        assert_eq!(classify(&response, &ctx()), OperationResult::Success(()));
    }

    #[test]
    fn test_success_message() {
        let response = raw(200, json!({"message": "Success: 'abc' Deleted"}));
        assert_eq!(classify(&response, &ctx()), OperationResult::Success(()));
    }

    #[test]
    fn test_success_status_code_number_or_string() {
        assert!(is_delete_success(&json!({"statusCode": 200})));
        assert!(is_delete_success(&json!({"statusCode": "200"})));
        assert!(!is_delete_success(&json!({"statusCode": 404})));
    }

    #[test]
    fn test_success_marker_requires_ok_http_status() {
        let response = raw(500, json!({"status": "success"}));

        let outcome = classify(&response, &ctx());
        assert_eq!(
            outcome.failure().map(|f| f.kind),
            Some(FailureKind::UnrecognizedResponse)
        );
    }

    #[test]
    fn test_rejected_uses_message() {
        let response = raw(
            404,
            json!({"status": "fail", "statusCode": 404, "message": "error: not found"}),
        );

        let outcome = classify(&response, &ctx());
        assert_eq!(
            outcome.failure(),
            Some(&Failure::remote_rejected("error: not found"))
        );
    }

    #[test]
    fn test_rejected_falls_back_to_error_field() {
        let response = raw(400, json!({"error": "keyword is reserved"}));

        let outcome = classify(&response, &ctx());
        assert_eq!(outcome.failure().map(|f| f.reason.as_str()), Some("keyword is reserved"));
    }

    #[test]
    fn test_plain_text_error_page() {
        let response = RawApiResponse::new(403, "Forbidden");

        let outcome = classify(&response, &ctx());
        assert_eq!(outcome.failure().map(|f| f.reason.as_str()), Some("HTTP 403: Forbidden"));
    }
}
