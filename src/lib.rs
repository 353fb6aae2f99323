//! # kurl
//!
//! Client core for a self-hosted YOURLS short link service, as used by a mail
//! client extension: shorten URLs, read their statistics, delete them and
//! verify credentials.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, ports and the response normalizer
//! - **Application Layer** ([`application`]) - The four operations
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport, origin allow list
//! - **API Layer** ([`api`]) - Local HTTP bridge for UI layers
//!
//! ## Features
//!
//! - Form POST with a single GET fallback for servers that reject POSTs
//! - Tolerant classification of the many YOURLS reply shapes
//! - Origin permission checked before every network call
//! - Operator CLI (`kurlctl`)
//!
//! ## Quick Start
//!
//! ```bash
//! export KURL_SERVICE_URL="https://sho.rt"
//! export KURL_API_SIGNATURE="1002a612b4"
//!
//! # Start the bridge
//! cargo run
//!
//! # Or use the CLI
//! cargo run --bin kurlctl -- check
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortLinkService;
    pub use crate::config::Config;
    pub use crate::domain::entities::{ComposeTarget, OperationResult, Settings, StatsSummary};
    pub use crate::domain::errors::{Failure, FailureKind, TransportError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::{ClientSetting, HttpTransport};
    pub use crate::infrastructure::permissions::OriginAllowList;
    pub use crate::state::AppState;
}
