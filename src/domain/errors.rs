//! Error types of the short link client core.
//!
//! - [`TransportError`] - raised by a transport for permission denial or
//!   network-level failures. HTTP error statuses are never transport errors.
//! - [`Failure`] - the classified failure every operation returns instead of
//!   raising. Carries a [`FailureKind`] and a human-readable reason.

use serde::Serialize;

/// Failure raised while contacting the short link service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The caller does not hold permission for the service origin.
    /// No network call was attempted.
    #[error("permission denied for origin {origin}")]
    PermissionDenied { origin: String },

    /// The API endpoint could not be built from the base URL.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    /// DNS, TLS, connection or body read failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Classification of an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    PermissionDenied,
    Transport,
    NotConfigured,
    NotFound,
    RemoteRejected,
    UnrecognizedResponse,
    KeywordRequired,
    ConnectionFailed,
}

/// A failed operation, as surfaced to callers as `{ok: false, reason}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Failure {
    pub kind: FailureKind,
    pub reason: String,
}

impl Failure {
    pub fn new(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    pub fn permission_denied() -> Self {
        Self::new(FailureKind::PermissionDenied, "permission denied")
    }

    pub fn not_configured() -> Self {
        Self::new(FailureKind::NotConfigured, "not configured")
    }

    pub fn not_found() -> Self {
        Self::new(FailureKind::NotFound, "not found")
    }

    pub fn keyword_required() -> Self {
        Self::new(FailureKind::KeywordRequired, "keyword required")
    }

    pub fn connection_failed() -> Self {
        Self::new(FailureKind::ConnectionFailed, "connection failed")
    }

    pub fn remote_rejected(message: impl Into<String>) -> Self {
        Self::new(FailureKind::RemoteRejected, message)
    }

    pub fn unrecognized(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::UnrecognizedResponse, reason)
    }
}

impl From<TransportError> for Failure {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::PermissionDenied { .. } => Self::permission_denied(),
            other => Self::new(FailureKind::Transport, other.to_string()),
        }
    }
}
