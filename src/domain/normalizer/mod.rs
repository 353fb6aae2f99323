//! Response normalization for the short link service API.
//!
//! The service has no canonical response schema: field locations and success
//! markers differ between server versions and plugins. Each operation is
//! classified by an explicit, ordered chain of shape matchers. A matcher
//! returns `Some(outcome)` when it recognizes the response and `None`
//! otherwise; the first match wins, and a generic HTTP-status failure is used
//! when nothing matches.
//!
//! # Modules
//!
//! - [`check`] - total link count for connection checks
//! - [`shorten`] - created / already exists / rejected
//! - [`stats`] - not found / HTTP error / payload
//! - [`delete`] - the three success encodings
//! - [`fields`] - field probing helpers shared by the matchers
//!
//! All functions here are pure; no state is kept between calls.

pub mod check;
pub mod delete;
pub mod fields;
pub mod shorten;
pub mod stats;

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{OperationResult, RawApiResponse};

/// Where the short URL of an "already exists" reply is looked up first.
///
/// Some servers only mention the existing link inside the message text
/// (`... (short URL: https://sho.rt/abc)`), others return it as a structured
/// `shorturl` field. Both are always tried; this only sets the precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingUrlSource {
    #[default]
    Message,
    Structured,
}

impl FromStr for ExistingUrlSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "message" => Ok(Self::Message),
            "structured" => Ok(Self::Structured),
            other => Err(format!(
                "expected 'message' or 'structured', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for ExistingUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => f.write_str("message"),
            Self::Structured => f.write_str("structured"),
        }
    }
}

/// Inputs a matcher may need besides the response itself.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    /// Sanitized service base URL, used to synthesize `{base}/{keyword}`.
    pub base_url: &'a str,
    pub existing_url_source: ExistingUrlSource,
}

impl<'a> ClassifyContext<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            existing_url_source: ExistingUrlSource::default(),
        }
    }

    pub fn with_existing_url_source(mut self, source: ExistingUrlSource) -> Self {
        self.existing_url_source = source;
        self
    }
}

/// A single shape matcher of a classification chain.
pub type Matcher<T> = fn(&RawApiResponse, &ClassifyContext<'_>) -> Option<OperationResult<T>>;

/// Runs `chain` in order and returns the first recognized outcome.
pub fn first_match<T>(
    chain: &[Matcher<T>],
    raw: &RawApiResponse,
    ctx: &ClassifyContext<'_>,
) -> Option<OperationResult<T>> {
    chain.iter().find_map(|matcher| matcher(raw, ctx))
}
