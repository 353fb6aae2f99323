//! Classification of `url-stats` replies.
//!
//! The payload of a successful lookup is returned verbatim; formatting it is
//! up to the caller (see [`crate::domain::entities::StatsSummary`]).

use serde_json::Value;

use super::{ClassifyContext, Matcher, first_match};
use crate::domain::entities::{OperationResult, RawApiResponse};
use crate::domain::errors::Failure;

/// Body characters kept in generic failure reasons.
pub const SNIPPET_CHARS: usize = 100;

const CHAIN: [Matcher<Value>; 3] = [not_found, http_error, payload];

/// Classifies a `url-stats` reply.
pub fn classify(raw: &RawApiResponse, ctx: &ClassifyContext<'_>) -> OperationResult<Value> {
    first_match(&CHAIN, raw, ctx)
        .unwrap_or_else(|| Failure::unrecognized(raw.http_failure_reason(SNIPPET_CHARS)).into())
}

/// HTTP 404: the keyword is unknown to the service.
pub fn not_found(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<Value>> {
    (raw.status == 404).then(|| Failure::not_found().into())
}

/// Any other non-2xx status.
pub fn http_error(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<Value>> {
    (!raw.is_success())
        .then(|| Failure::unrecognized(raw.http_failure_reason(SNIPPET_CHARS)).into())
}

/// A parsed JSON payload.
pub fn payload(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<Value>> {
    raw.json.clone().map(OperationResult::Success)
}
