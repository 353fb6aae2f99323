//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup by both binaries. A missing service
//! URL or signature is not a load error: operations then report
//! "not configured", and `kurlctl config` shows what is missing.
//!
//! ## Example
//!
//! ```bash
//! export KURL_SERVICE_URL="https://sho.rt"
//! export KURL_API_SIGNATURE="1002a612b4"
//! ```
//!
//! ## Optional Variables
//!
//! - `KURL_AUTO_COPY` - Copy new short URLs to the clipboard (default: `true`)
//! - `KURL_ALLOWED_ORIGINS` - Comma separated origins the client may contact
//!   (default: the origin of `KURL_SERVICE_URL`)
//! - `KURL_EXISTING_URL_SOURCE` - `message` or `structured` (default: `message`)
//! - `KURL_HTTP_TIMEOUT_SECS` - HTTP client timeout (default: 30, max: 300)
//! - `LISTEN` - Bridge bind address (default: `127.0.0.1:8787`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::Settings;
use crate::domain::normalizer::ExistingUrlSource;
use crate::domain::ports::SettingsProvider;
use crate::infrastructure::http::ClientSetting;
use crate::infrastructure::permissions::OriginAllowList;
use crate::utils::url_normalizer::{origin_of, sanitize_base_url};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service base URL as configured. Sanitized before every use.
    pub service_url: String,
    pub api_signature: String,
    pub auto_copy: bool,
    /// Origins the client may contact. Entries may end in `/*`.
    pub allowed_origins: Vec<String>,
    pub existing_url_source: ExistingUrlSource,
    pub http_timeout_secs: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `KURL_EXISTING_URL_SOURCE` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let service_url = env::var("KURL_SERVICE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let api_signature = env::var("KURL_API_SIGNATURE")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let auto_copy = env::var("KURL_AUTO_COPY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let allowed_origins = Self::load_allowed_origins(&service_url);

        let existing_url_source = match env::var("KURL_EXISTING_URL_SOURCE") {
            Ok(v) => v
                .parse::<ExistingUrlSource>()
                .map_err(anyhow::Error::msg)
                .context("Invalid KURL_EXISTING_URL_SOURCE")?,
            Err(_) => ExistingUrlSource::default(),
        };

        let http_timeout_secs = env::var("KURL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8787".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            service_url,
            api_signature,
            auto_copy,
            allowed_origins,
            existing_url_source,
            http_timeout_secs,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads the allowed origins.
    ///
    /// Priority:
    /// 1. `KURL_ALLOWED_ORIGINS`, comma separated, blanks ignored
    /// 2. The origin of the service URL, if it has one
    fn load_allowed_origins(service_url: &str) -> Vec<String> {
        let explicit: Vec<String> = env::var("KURL_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if !explicit.is_empty() {
            return explicit;
        }

        sanitize_base_url(service_url)
            .ok()
            .and_then(|base| origin_of(&base))
            .into_iter()
            .collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `service_url` is set but not an HTTP(S) URL
    /// - an allowed origin is not an HTTP(S) URL
    /// - `http_timeout_secs` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if !self.service_url.is_empty() {
            sanitize_base_url(&self.service_url).with_context(|| {
                format!("KURL_SERVICE_URL is not a valid URL: '{}'", self.service_url)
            })?;
        }

        for origin in &self.allowed_origins {
            if origin_of(origin.trim_end_matches('*')).is_none() {
                anyhow::bail!(
                    "KURL_ALLOWED_ORIGINS entries must be http(s) origins, got '{}'",
                    origin
                );
            }
        }

        if self.http_timeout_secs == 0 || self.http_timeout_secs > 300 {
            anyhow::bail!(
                "KURL_HTTP_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.http_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether both the service URL and the signature are set.
    pub fn is_configured(&self) -> bool {
        self.settings().is_complete()
    }

    /// Builds the permission oracle from `allowed_origins`.
    pub fn permission_oracle(&self) -> OriginAllowList {
        OriginAllowList::new(&self.allowed_origins)
    }

    /// HTTP client options for the transport.
    pub fn client_setting(&self) -> ClientSetting {
        ClientSetting {
            timeout: Duration::from_secs(self.http_timeout_secs),
            ..Default::default()
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        if self.service_url.is_empty() {
            tracing::info!("  Service URL: (not set)");
        } else {
            tracing::info!("  Service URL: {}", self.service_url);
        }
        tracing::info!("  API signature: {}", mask_secret(&self.api_signature));
        tracing::info!("  Auto copy: {}", self.auto_copy);
        tracing::info!("  Allowed origins: {}", self.allowed_origins.join(", "));
        tracing::info!("  Existing URL source: {}", self.existing_url_source);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_secs);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl SettingsProvider for Config {
    fn settings(&self) -> Settings {
        Settings {
            service_url: self.service_url.clone(),
            api_signature: self.api_signature.clone(),
            auto_copy: self.auto_copy,
        }
    }
}

/// Masks a secret for logging, keeping at most its first four characters.
///
/// - `1002a612b4` → `1002***`
/// - `abc` → `***`
/// - empty → `(not set)`
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }

    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable holds an invalid value.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
