//! Classification of text selected in a compose window.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Matches strings starting with an HTTP(S) scheme.
pub static HTTP_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

static URL_IN_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// What a selection should open: stats for a short link, or the shorten form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum Selection {
    Short(String),
    Long(String),
    Empty,
}

/// Classifies a selection against the sanitized service URL.
///
/// A selection is a short link when it starts with `base_url` and has at
/// least two more characters (a separator plus a keyword).
pub fn classify_selection(base_url: &str, selected: &str) -> Selection {
    let selected = selected.trim();

    let url = if HTTP_URL_REGEX.is_match(selected) {
        selected
    } else {
        match find_url_in_text(selected) {
            Some(url) => url,
            None => return Selection::Empty,
        }
    };

    if !base_url.is_empty() && url.starts_with(base_url) && url.len() > base_url.len() + 1 {
        Selection::Short(url.to_string())
    } else {
        Selection::Long(url.to_string())
    }
}

/// Returns the first HTTP(S) URL found in free text.
pub fn find_url_in_text(text: &str) -> Option<&str> {
    URL_IN_TEXT_REGEX.find(text).map(|m| m.as_str())
}
