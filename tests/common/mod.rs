#![allow(dead_code)]

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE};
use axum::{Router, routing::any};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use kurl::application::services::ShortLinkService;
use kurl::config::Config;
use kurl::domain::normalizer::ExistingUrlSource;
use kurl::infrastructure::http::{ClientSetting, HttpTransport};
use kurl::infrastructure::permissions::OriginAllowList;
use kurl::state::AppState;

pub const SIGNATURE: &str = "1002a612b4";

/// One request received by the mock API.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub method: String,
    pub content_type: Option<String>,
    pub params: Vec<(String, String)>,
}

impl Hit {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn action(&self) -> &str {
        self.param("action").unwrap_or_default()
    }

    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }
}

type Responder = Arc<dyn Fn(&Hit) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    hits: Arc<Mutex<Vec<Hit>>>,
    responder: Responder,
}

/// A YOURLS API stand-in listening on a random loopback port.
///
/// Serves `/yourls-api.php` and `/yourls/yourls-api.php`, decodes form bodies
/// and query strings alike, and answers with whatever the responder returns.
pub struct MockYourls {
    pub base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockYourls {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Hit) -> (u16, String) + Send + Sync + 'static,
    {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            hits: hits.clone(),
            responder: Arc::new(responder),
        };

        let app = Router::new()
            .route("/yourls-api.php", any(api))
            .route("/yourls/yourls-api.php", any(api))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    /// Always answers with the same status and JSON body.
    pub async fn fixed(status: u16, body: Value) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone())).await
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn origin(&self) -> String {
        self.base_url.clone()
    }
}

/// Serves `200 OK` announcing a 500-byte body, writes only a prefix of it,
/// then closes the connection. Returns the base URL.
pub async fn start_truncating_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                read_full_request(&mut socket).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"shorturl\":\"https://sh",
                    )
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Drains headers and the declared body so closing the socket does not reset it early.
async fn read_full_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if buf.len() >= end + 4 + body_len {
            return;
        }
    }
}

async fn api(
    State(state): State<MockState>,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: String,
) -> (StatusCode, String) {
    let raw = if method == Method::GET {
        query.unwrap_or_default()
    } else {
        body
    };

    let hit = Hit {
        method: method.to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        params: url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect(),
    };

    let (status, reply) = (state.responder)(&hit);
    state.hits.lock().unwrap().push(hit);

    (StatusCode::from_u16(status).unwrap(), reply)
}

/// Transport that ignores proxy environment variables, so loopback works in CI.
pub fn transport() -> HttpTransport {
    HttpTransport::new(&ClientSetting {
        timeout: Duration::from_secs(5),
        system_proxy: false,
    })
    .unwrap()
}

pub fn config(service_url: &str, signature: &str) -> Config {
    Config {
        service_url: service_url.to_string(),
        api_signature: signature.to_string(),
        auto_copy: true,
        allowed_origins: vec![format!("{}/*", service_url.trim_end_matches('/'))],
        existing_url_source: ExistingUrlSource::Message,
        http_timeout_secs: 5,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

pub type TestService = ShortLinkService<HttpTransport, Config, OriginAllowList>;

pub fn create_service(config: Config) -> TestService {
    let permissions = config.permission_oracle();
    let source = config.existing_url_source;
    ShortLinkService::new(Arc::new(transport()), Arc::new(config), Arc::new(permissions))
        .with_existing_url_source(source)
}

pub fn create_test_state(config: Config) -> AppState {
    AppState::new(Arc::new(create_service(config)))
}
