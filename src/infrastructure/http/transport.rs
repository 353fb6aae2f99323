//! reqwest-backed transport for `yourls-api.php`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::{ApiRequest, RawApiResponse};
use crate::domain::errors::TransportError;
use crate::domain::ports::Transport;

/// API script path under the service base URL.
pub const API_ENTRYPOINT: &str = "yourls-api.php";

/// POST statuses that trigger the GET fallback.
///
/// Reverse proxies and web application firewalls commonly answer form POSTs
/// they dislike with one of these.
pub const FALLBACK_STATUSES: [u16; 4] = [400, 403, 405, 415];

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";
const JSON_ACCEPT: &str = "application/json";

/// HTTP client options.
#[derive(Debug, Clone)]
pub struct ClientSetting {
    /// Network-level timeout of a single request.
    pub timeout: Duration,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ClientSetting {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            system_proxy: true,
        }
    }
}

impl ClientSetting {
    pub fn build(&self) -> Result<Client, TransportError> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("kurl/", env!("CARGO_PKG_VERSION")));

        if !self.system_proxy {
            builder = builder.no_proxy();
        }

        builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {}", e)))
    }
}

/// Sends API requests as form POSTs, falling back to a single GET.
///
/// # Fallback Policy
///
/// 1. POST the parameters form-encoded to `{base}/yourls-api.php`
/// 2. If the status is in [`FALLBACK_STATUSES`], repeat the same parameters
///    once as a GET query string and return that response, whatever it is
/// 3. Any other status (including 5xx) is returned as-is
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a client built from `setting`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the TLS backend cannot be initialized.
    pub fn new(setting: &ClientSetting) -> Result<Self, TransportError> {
        Ok(Self {
            client: setting.build()?,
        })
    }

    /// Builds the API endpoint URL for a sanitized base URL.
    pub fn endpoint(base_url: &str) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", base_url.trim_end_matches('/'), API_ENTRYPOINT);
        Url::parse(&raw).map_err(|e| TransportError::InvalidEndpoint(format!("{}: {}", raw, e)))
    }

    async fn post(&self, endpoint: &Url, request: &ApiRequest) -> Result<RawApiResponse, TransportError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(request.params())
            .finish();

        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, JSON_ACCEPT)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        read_response(response).await
    }

    async fn get(&self, endpoint: &Url, request: &ApiRequest) -> Result<RawApiResponse, TransportError> {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(request.params());

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_ACCEPT)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        read_response(response).await
    }
}

/// Reads status and body. A body cut short by the peer is a network error.
async fn read_response(response: Response) -> Result<RawApiResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(format!("Failed to read response body: {}", e)))?;
    Ok(RawApiResponse::new(status, body))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        base_url: &str,
        request: &ApiRequest,
    ) -> Result<RawApiResponse, TransportError> {
        let endpoint = Self::endpoint(base_url)?;

        debug!(action = request.action(), endpoint = %endpoint, "POST api request");
        let primary = self.post(&endpoint, request).await?;

        if !FALLBACK_STATUSES.contains(&primary.status) {
            return Ok(primary);
        }

        warn!(
            action = request.action(),
            status = primary.status,
            "POST rejected, retrying as GET"
        );
        let fallback = self.get(&endpoint, request).await?;
        debug!(action = request.action(), status = fallback.status, "GET fallback finished");

        Ok(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_root_install() {
        let endpoint = HttpTransport::endpoint("https://sho.rt").unwrap();
        assert_eq!(endpoint.as_str(), "https://sho.rt/yourls-api.php");
    }

    #[test]
    fn test_endpoint_for_subdirectory_install() {
        let endpoint = HttpTransport::endpoint("https://example.com/yourls/").unwrap();
        assert_eq!(endpoint.as_str(), "https://example.com/yourls/yourls-api.php");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            HttpTransport::endpoint("not a url"),
            Err(TransportError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_fallback_statuses() {
        for status in [400, 403, 405, 415] {
            assert!(FALLBACK_STATUSES.contains(&status));
        }
        for status in [200, 401, 404, 500, 502] {
            assert!(!FALLBACK_STATUSES.contains(&status));
        }
    }

    #[test]
    fn test_client_setting_builds() {
        let setting = ClientSetting {
            system_proxy: false,
            ..Default::default()
        };
        assert!(HttpTransport::new(&setting).is_ok());
    }
}
