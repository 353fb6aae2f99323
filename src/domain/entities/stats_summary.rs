//! Display summary extracted from a `url-stats` payload.

use serde::Serialize;
use serde_json::Value;

use crate::domain::normalizer::fields::{as_count, non_empty_str};

/// Short URL, long URL and click count of a link.
///
/// `url-stats` returns the link under `link` on current servers and under
/// `url` on some plugin builds; both are read. Each field is optional since the
/// payload is passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub short_url: Option<String>,
    pub long_url: Option<String>,
    pub clicks: Option<u64>,
}

impl StatsSummary {
    pub fn from_payload(payload: &Value) -> Self {
        let link = payload
            .get("link")
            .filter(|v| v.is_object())
            .or_else(|| payload.get("url").filter(|v| v.is_object()));

        let Some(link) = link else {
            return Self::default();
        };

        Self {
            short_url: link.get("shorturl").and_then(non_empty_str).map(str::to_string),
            long_url: link.get("url").and_then(non_empty_str).map(str::to_string),
            clicks: link.get("clicks").and_then(as_count),
        }
    }
}
