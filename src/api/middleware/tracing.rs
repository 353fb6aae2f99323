//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for bridge requests.
///
/// Spans and responses are logged at `INFO`, latency in milliseconds.
/// Message bodies are not logged, so the signature never reaches the logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/message version=HTTP/1.1}: started processing request
/// INFO request{method=POST uri=/api/message version=HTTP/1.1}: finished processing request latency=143 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
