//! Connection settings for the short link service.

/// Settings read at the start of every operation.
///
/// Owned by an external settings store (options page, environment, ...).
/// The core never mutates them. `service_url` may be stored unsanitized; it is
/// normalized with [`crate::utils::url_normalizer::sanitize_base_url`] before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub api_signature: String,
    pub auto_copy: bool,
}

impl Settings {
    /// Creates settings with auto-copy enabled, matching the store defaults.
    pub fn new(service_url: impl Into<String>, api_signature: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            api_signature: api_signature.into(),
            auto_copy: true,
        }
    }

    /// Returns true if both the service URL and the signature are present.
    ///
    /// This does not validate the URL; see
    /// [`crate::utils::url_normalizer::sanitize_base_url`].
    pub fn is_complete(&self) -> bool {
        !self.service_url.trim().is_empty() && !self.api_signature.trim().is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new("", "")
    }
}
