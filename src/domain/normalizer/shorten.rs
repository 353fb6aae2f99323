//! Classification of `shorturl` replies.
//!
//! Chain order:
//!
//! 1. [`already_exists`] - message mentions "already exists"
//! 2. [`created`] - 2xx with a short URL somewhere in the payload
//! 3. [`rejected`] - `status: "fail"` with a message
//!
//! Anything else becomes `HTTP {status}: {first 200 chars}`.

use regex::Regex;
use std::sync::LazyLock;

use super::fields::{extract_short_url, message, status};
use super::{ClassifyContext, ExistingUrlSource, Matcher, first_match};
use crate::domain::entities::{OperationResult, RawApiResponse};
use crate::domain::errors::Failure;

/// Body characters kept in generic failure reasons.
pub const SNIPPET_CHARS: usize = 200;

static ALREADY_EXISTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)already exists").unwrap());

/// Matches `(short URL: https://sho.rt/abc)` inside a message.
static EXISTING_SHORT_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(short URL: (https?://\S+)\)").unwrap());

const CHAIN: [Matcher<String>; 3] = [already_exists, created, rejected];

/// Classifies a `shorturl` reply.
pub fn classify(raw: &RawApiResponse, ctx: &ClassifyContext<'_>) -> OperationResult<String> {
    first_match(&CHAIN, raw, ctx)
        .unwrap_or_else(|| Failure::unrecognized(raw.http_failure_reason(SNIPPET_CHARS)).into())
}

/// The long URL (or requested keyword) is already known to the service.
///
/// Checked regardless of HTTP status: servers report duplicates both with 200
/// and with 4xx codes. A missing short URL is tolerated.
pub fn already_exists(
    raw: &RawApiResponse,
    ctx: &ClassifyContext<'_>,
) -> Option<OperationResult<String>> {
    let json = raw.json.as_ref()?;
    let text = message(json)?;

    if !ALREADY_EXISTS_REGEX.is_match(text) {
        return None;
    }

    let from_message = || {
        EXISTING_SHORT_URL_REGEX
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    };
    let from_fields = || extract_short_url(json, ctx.base_url);

    let short_url = match ctx.existing_url_source {
        ExistingUrlSource::Message => from_message().or_else(from_fields),
        ExistingUrlSource::Structured => from_fields().or_else(from_message),
    };

    Some(OperationResult::AlreadyExists { short_url })
}

/// A new short URL was created.
pub fn created(raw: &RawApiResponse, ctx: &ClassifyContext<'_>) -> Option<OperationResult<String>> {
    if !raw.is_success() {
        return None;
    }

    let json = raw.json.as_ref()?;
    extract_short_url(json, ctx.base_url).map(OperationResult::Success)
}

/// The service explicitly refused the request.
pub fn rejected(raw: &RawApiResponse, _ctx: &ClassifyContext<'_>) -> Option<OperationResult<String>> {
    let json = raw.json.as_ref()?;

    if status(json) != Some("fail") {
        return None;
    }

    message(json).map(|text| Failure::remote_rejected(text).into())
}
