//! Field probing helpers for loosely-typed API payloads.

use serde_json::Value;

/// Returns the value as a string slice if it is a non-empty string.
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Reads a count that may be encoded as a number or as a numeric string.
///
/// The service returns `"total_links": "42"` from some endpoints and
/// `"total_links": 42` from others.
pub fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Returns the top-level `message` string.
pub fn message(json: &Value) -> Option<&str> {
    json.get("message").and_then(non_empty_str)
}

/// Returns the top-level `status` string.
pub fn status(json: &Value) -> Option<&str> {
    json.get("status").and_then(Value::as_str)
}

/// Probes a payload for the short URL it describes.
///
/// Order: `shorturl`, `url.shorturl`, `link.shorturl`, then `{base}/{keyword}`
/// when only a bare `keyword` is present.
pub fn extract_short_url(json: &Value, base_url: &str) -> Option<String> {
    const PROBES: [&str; 3] = ["/shorturl", "/url/shorturl", "/link/shorturl"];

    if let Some(short) = PROBES
        .iter()
        .find_map(|pointer| json.pointer(pointer).and_then(non_empty_str))
    {
        return Some(short.to_string());
    }

    json.get("keyword")
        .and_then(non_empty_str)
        .map(|keyword| format!("{}/{}", base_url.trim_end_matches('/'), keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://sho.rt";

    #[test]
    fn test_as_count_accepts_numbers_and_strings() {
        assert_eq!(as_count(&json!(42)), Some(42));
        assert_eq!(as_count(&json!("42")), Some(42));
        assert_eq!(as_count(&json!(" 7 ")), Some(7));
        assert_eq!(as_count(&json!("many")), None);
        assert_eq!(as_count(&json!(-1)), None);
        assert_eq!(as_count(&json!(null)), None);
    }

    #[test]
    fn test_extract_top_level_shorturl() {
        let json = json!({"shorturl": "https://sho.rt/a", "url": {"shorturl": "https://sho.rt/b"}});
        assert_eq!(extract_short_url(&json, BASE).as_deref(), Some("https://sho.rt/a"));
    }

    #[test]
    fn test_extract_nested_shorturl() {
        let json = json!({"url": {"shorturl": "https://sho.rt/b"}});
        assert_eq!(extract_short_url(&json, BASE).as_deref(), Some("https://sho.rt/b"));

        let json = json!({"link": {"shorturl": "https://sho.rt/c"}});
        assert_eq!(extract_short_url(&json, BASE).as_deref(), Some("https://sho.rt/c"));
    }

    #[test]
    fn test_extract_synthesizes_from_keyword() {
        let json = json!({"keyword": "promo"});
        assert_eq!(
            extract_short_url(&json, "https://sho.rt/"),
            Some("https://sho.rt/promo".to_string())
        );
    }

    #[test]
    fn test_extract_ignores_empty_and_non_string_fields() {
        let json = json!({"shorturl": "", "url": "https://example.com", "keyword": ""});
        assert_eq!(extract_short_url(&json, BASE), None);
    }

    #[test]
    fn test_message_requires_non_empty_string() {
        assert_eq!(message(&json!({"message": "ok"})), Some("ok"));
        assert_eq!(message(&json!({"message": ""})), None);
        assert_eq!(message(&json!({"message": 5})), None);
    }
}
