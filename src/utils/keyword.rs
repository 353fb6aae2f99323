//! Short link reference handling.

use url::Url;

/// Reduces a short URL or keyword to the bare keyword.
///
/// A full URL on the same origin as `base_url` yields its last path segment.
/// Anything else (plain keywords, URLs on other hosts) is returned trimmed but
/// otherwise unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_keyword("https://sho.rt", "https://sho.rt/abc/"), "abc");
/// assert_eq!(extract_keyword("https://sho.rt", "abc"), "abc");
/// assert_eq!(extract_keyword("https://sho.rt", "https://other.host/abc"), "https://other.host/abc");
/// ```
pub fn extract_keyword(base_url: &str, reference: &str) -> String {
    let reference = reference.trim();

    let Ok(url) = Url::parse(reference) else {
        return reference.to_string();
    };

    let same_origin = Url::parse(base_url)
        .map(|base| base.origin() == url.origin())
        .unwrap_or(false);

    if !same_origin {
        return reference.to_string();
    }

    url.path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
