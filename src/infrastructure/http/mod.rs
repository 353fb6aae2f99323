//! HTTP transport to the short link service.

mod transport;

pub use transport::{API_ENTRYPOINT, ClientSetting, FALLBACK_STATUSES, HttpTransport};
