//! Service URL sanitation and origin handling.
//!
//! The configured service URL is reduced to `scheme://host[:port][/path]`
//! without a trailing slash before any request is built.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Normalizes a service base URL.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: removed everywhere (pasted URLs often wrap)
/// 2. **Protocol**: only HTTP and HTTPS are allowed
/// 3. **Origin**: lowercased host, default port removed
/// 4. **Path**: preserved without trailing slashes
/// 5. **Query and fragment**: dropped
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for malformed URLs and
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     sanitize_base_url(" https://Sho.RT:443/yourls/ ").unwrap(),
///     "https://sho.rt/yourls"
/// );
/// ```
pub fn sanitize_base_url(input: &str) -> Result<String, UrlNormalizationError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.trim_end_matches('/');

    if compact.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let url = Url::parse(compact).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let origin = url.origin().ascii_serialization();
    let path = url.path().trim_end_matches('/');

    Ok(format!("{}{}", origin, path))
}

/// Returns the `scheme://host[:port]` origin of an HTTP(S) URL.
pub fn origin_of(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;

    match url.scheme() {
        "http" | "https" => Some(url.origin().ascii_serialization()),
        _ => None,
    }
}
