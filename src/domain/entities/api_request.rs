//! Parameters of a single call to the short link service API.

use std::fmt;

/// Output format requested from the service on every call.
pub const OUTPUT_FORMAT: &str = "json";

/// A flat, ordered list of string parameters sent to `yourls-api.php`.
///
/// Every request carries `action`, `format=json` and `signature`. The same
/// parameters are used for the form-encoded POST body and for the query string
/// of the GET fallback.
///
/// `Debug` output masks the signature so requests can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request for `action`, authenticated with `signature`.
    pub fn new(action: &str, signature: &str) -> Self {
        Self {
            params: vec![
                ("action".to_string(), action.to_string()),
                ("format".to_string(), OUTPUT_FORMAT.to_string()),
                ("signature".to_string(), signature.to_string()),
            ],
        }
    }

    /// Appends a parameter.
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Appends a parameter only when `value` is present and not blank.
    pub fn optional_param(self, key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    /// Returns the `action` parameter.
    pub fn action(&self) -> &str {
        self.get("action").unwrap_or_default()
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.params {
            if key == "signature" {
                map.entry(key, &"***");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}
