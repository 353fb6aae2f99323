//! The four short link operations.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::{ApiRequest, OperationResult, RawApiResponse, Settings};
use crate::domain::errors::{Failure, TransportError};
use crate::domain::normalizer::check::{db_stats_fallback_total, stats_total};
use crate::domain::normalizer::{ClassifyContext, ExistingUrlSource, delete, shorten, stats};
use crate::domain::ports::{PermissionOracle, SettingsProvider, Transport};
use crate::utils::keyword::extract_keyword;
use crate::utils::url_normalizer::{origin_of, sanitize_base_url};

/// Sanitized base URL and signature of a single operation.
struct Connection {
    base_url: String,
    signature: String,
}

/// Runs check-connection, shorten, stats and delete against the service.
///
/// Every operation reads fresh settings, checks the origin permission before
/// each network call and returns an [`OperationResult`]; nothing is raised.
/// The service keeps no state between calls, so a single instance may be
/// shared freely.
pub struct ShortLinkService<T: Transport, S: SettingsProvider, P: PermissionOracle> {
    transport: Arc<T>,
    settings: Arc<S>,
    permissions: Arc<P>,
    existing_url_source: ExistingUrlSource,
}

impl<T: Transport, S: SettingsProvider, P: PermissionOracle> ShortLinkService<T, S, P> {
    /// Creates a new short link service.
    pub fn new(transport: Arc<T>, settings: Arc<S>, permissions: Arc<P>) -> Self {
        Self {
            transport,
            settings,
            permissions,
            existing_url_source: ExistingUrlSource::default(),
        }
    }

    /// Sets where the short URL of an "already exists" reply is looked up first.
    pub fn with_existing_url_source(mut self, source: ExistingUrlSource) -> Self {
        self.existing_url_source = source;
        self
    }

    /// Current settings as supplied by the provider.
    pub fn settings(&self) -> Settings {
        self.settings.settings()
    }

    /// Sanitized service base URL, or `None` if unset or invalid.
    pub fn base_url(&self) -> Option<String> {
        sanitize_base_url(&self.settings.settings().service_url).ok()
    }

    /// Returns true if the permission oracle allows the service origin.
    pub fn has_service_permission(&self) -> bool {
        self.base_url()
            .and_then(|base| origin_of(&base))
            .is_some_and(|origin| self.permissions.has_origin_permission(&origin))
    }

    /// Verifies credentials by asking for the total link count.
    ///
    /// Tries `stats` first and `db-stats` once if the first reply is unusable.
    ///
    /// # Returns
    ///
    /// - `Success(total)` - the count from either reply
    /// - `Failure("not configured")` - URL or signature missing, no network call
    /// - `Failure("permission denied")` - origin not allowed, no network call
    /// - `Failure("connection failed")` - neither reply carried a count
    pub async fn check_connection(&self) -> OperationResult<u64> {
        let conn = match self.connection() {
            Ok(conn) => conn,
            Err(failure) => return failure.into(),
        };

        let request = ApiRequest::new("stats", &conn.signature);
        match self.send(&conn.base_url, &request).await {
            Ok(raw) => {
                if let Some(total) = stats_total(&raw) {
                    info!("Connection OK: {} links", total);
                    return OperationResult::Success(total);
                }
                debug!(status = raw.status, "stats reply carries no total, trying db-stats");
            }
            Err(e @ TransportError::PermissionDenied { .. }) => return Failure::from(e).into(),
            Err(e) => warn!("stats request failed: {}", e),
        }

        let request = ApiRequest::new("db-stats", &conn.signature);
        match self.send(&conn.base_url, &request).await {
            Ok(raw) => {
                if let Some(total) = db_stats_fallback_total(&raw) {
                    info!("Connection OK via db-stats: {} links", total);
                    return OperationResult::Success(total);
                }
                debug!(status = raw.status, "db-stats reply carries no total");
            }
            Err(e @ TransportError::PermissionDenied { .. }) => return Failure::from(e).into(),
            Err(e) => warn!("db-stats request failed: {}", e),
        }

        warn!("Connection check failed for {}", conn.base_url);
        Failure::connection_failed().into()
    }

    /// Shortens `long_url`, optionally with a custom keyword and title.
    ///
    /// Blank `keyword`/`title` values are not sent.
    ///
    /// # Returns
    ///
    /// - `Success(short_url)` - a new short link was created
    /// - `AlreadyExists { short_url }` - the URL or keyword is already taken
    /// - `Failure(..)` - see [`crate::domain::normalizer::shorten`]
    pub async fn shorten(
        &self,
        long_url: &str,
        keyword: Option<&str>,
        title: Option<&str>,
    ) -> OperationResult<String> {
        let conn = match self.connection() {
            Ok(conn) => conn,
            Err(failure) => return failure.into(),
        };

        let request = ApiRequest::new("shorturl", &conn.signature)
            .param("url", long_url.trim())
            .optional_param("keyword", keyword)
            .optional_param("title", title);

        let raw = match self.send(&conn.base_url, &request).await {
            Ok(raw) => raw,
            Err(e) => return transport_failure("shorturl", e),
        };

        let ctx = ClassifyContext::new(&conn.base_url)
            .with_existing_url_source(self.existing_url_source);

        let outcome = shorten::classify(&raw, &ctx);
        match &outcome {
            OperationResult::Success(short_url) => info!("Created short link {}", short_url),
            OperationResult::AlreadyExists { short_url } => {
                info!("Short link already exists: {:?}", short_url)
            }
            OperationResult::Failure(failure) => warn!("Shorten failed: {}", failure),
        }
        outcome
    }

    /// Fetches the raw statistics payload of a short URL or keyword.
    ///
    /// # Returns
    ///
    /// - `Success(payload)` - the parsed reply, verbatim
    /// - `Failure("not found")` - HTTP 404
    /// - `Failure("HTTP {status}: ..")` - any other error status
    pub async fn stats(&self, short_or_keyword: &str) -> OperationResult<Value> {
        let conn = match self.connection() {
            Ok(conn) => conn,
            Err(failure) => return failure.into(),
        };

        let keyword = extract_keyword(&conn.base_url, short_or_keyword);
        let request = ApiRequest::new("url-stats", &conn.signature).param("shorturl", keyword.as_str());

        let raw = match self.send(&conn.base_url, &request).await {
            Ok(raw) => raw,
            Err(e) => return transport_failure("url-stats", e),
        };

        let outcome = stats::classify(&raw, &ClassifyContext::new(&conn.base_url));
        match outcome.failure() {
            None => info!("Fetched stats for {}", keyword),
            Some(failure) => warn!("Stats for {} failed: {}", keyword, failure),
        }
        outcome
    }

    /// Deletes a short URL or keyword.
    ///
    /// An empty keyword fails with "keyword required" before anything else
    /// is checked.
    pub async fn delete(&self, short_or_keyword: &str) -> OperationResult<()> {
        let base_url = self.base_url().unwrap_or_default();
        let keyword = extract_keyword(&base_url, short_or_keyword);
        if keyword.is_empty() {
            return Failure::keyword_required().into();
        }

        let conn = match self.connection() {
            Ok(conn) => conn,
            Err(failure) => return failure.into(),
        };

        let request = ApiRequest::new("delete", &conn.signature).param("shorturl", keyword.as_str());

        let raw = match self.send(&conn.base_url, &request).await {
            Ok(raw) => raw,
            Err(e) => return transport_failure("delete", e),
        };

        let outcome = delete::classify(&raw, &ClassifyContext::new(&conn.base_url));
        match outcome.failure() {
            None => info!("Deleted short link {}", keyword),
            Some(failure) => warn!("Delete of {} failed: {}", keyword, failure),
        }
        outcome
    }

    fn connection(&self) -> Result<Connection, Failure> {
        let settings = self.settings.settings();
        if !settings.is_complete() {
            debug!("Service URL or signature missing");
            return Err(Failure::not_configured());
        }

        let base_url = sanitize_base_url(&settings.service_url).map_err(|e| {
            warn!("Invalid service URL '{}': {}", settings.service_url, e);
            Failure::not_configured()
        })?;

        Ok(Connection {
            base_url,
            signature: settings.api_signature.trim().to_string(),
        })
    }

    async fn send(
        &self,
        base_url: &str,
        request: &ApiRequest,
    ) -> Result<RawApiResponse, TransportError> {
        let origin = origin_of(base_url).unwrap_or_default();
        if !self.permissions.has_origin_permission(&origin) {
            warn!("No permission for origin {}", origin);
            return Err(TransportError::PermissionDenied { origin });
        }

        self.transport.send(base_url, request).await
    }
}

fn transport_failure<V>(action: &str, err: TransportError) -> OperationResult<V> {
    warn!("{} request failed: {}", action, err);
    Failure::from(err).into()
}
