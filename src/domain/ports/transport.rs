//! Transport trait for calling the short link service API.

use crate::domain::entities::{ApiRequest, RawApiResponse};
use crate::domain::errors::TransportError;
use async_trait::async_trait;

/// Performs one call to the service's JSON-over-HTTP endpoint.
///
/// Implementations never fail on HTTP error statuses: 4xx/5xx responses are
/// returned as [`RawApiResponse`] data. Only network-level problems produce a
/// [`TransportError`].
///
/// Origin permission is checked by the caller before `send` is invoked.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpTransport`] - reqwest implementation
///   with POST-then-GET fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` to the API endpoint under `base_url`.
    ///
    /// `base_url` is already sanitized (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] on DNS, TLS or connection failures
    /// and [`TransportError::InvalidEndpoint`] if no endpoint URL can be built.
    async fn send(
        &self,
        base_url: &str,
        request: &ApiRequest,
    ) -> Result<RawApiResponse, TransportError>;
}
