use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use time::OffsetDateTime;

use crate::core::metrics;
use crate::core::state::AppState;
use crate::core::time::format_offset;
use crate::schemas::HealthResponse;

/// Liveness only; does not touch the database.
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", timestamp: format_offset(OffsetDateTime::now_utc()) })
}

pub(crate) async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    if !state.settings().telemetry().prometheus_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    match metrics::render() {
        Some(body) => ([(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
            .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
