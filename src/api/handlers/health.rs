//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns bridge readiness without contacting the short link service.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Settings complete and service origin allowed
/// - **503 Service Unavailable**: Operations would fail before any network call
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "settings": { "status": "ok", "message": "Service URL: https://sho.rt" },
///     "permission": { "status": "ok", "message": "Origin allowed" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let settings_check = check_settings(&state);
    let permission_check = check_permission(&state);

    let all_healthy = settings_check.is_ok() && permission_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            settings: settings_check,
            permission: permission_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that service URL and signature are present and the URL is usable.
fn check_settings(state: &AppState) -> CheckStatus {
    if !state.service.settings().is_complete() {
        return CheckStatus::error("Service URL or API signature not set");
    }

    match state.service.base_url() {
        Some(base_url) => CheckStatus::ok(format!("Service URL: {}", base_url)),
        None => CheckStatus::error("Service URL is not a valid http(s) URL"),
    }
}

/// Checks that the service origin is in the allow list.
fn check_permission(state: &AppState) -> CheckStatus {
    if state.service.has_service_permission() {
        CheckStatus::ok("Origin allowed")
    } else {
        CheckStatus::error("Service origin not allowed")
    }
}
