//! Shared state of the local bridge.

use std::sync::Arc;

use crate::application::services::ShortLinkService;
use crate::config::Config;
use crate::infrastructure::http::HttpTransport;
use crate::infrastructure::permissions::OriginAllowList;

/// Service wired with the production adapters.
pub type DefaultService = ShortLinkService<HttpTransport, Config, OriginAllowList>;

/// State injected into every bridge handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DefaultService>,
}

impl AppState {
    pub fn new(service: Arc<DefaultService>) -> Self {
        Self { service }
    }
}
