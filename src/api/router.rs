use axum::{
    http::header::{HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN},
    http::{HeaderName, Method, Request, Response},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    normalize_path::NormalizePath,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::api::{announcements, auth, courses, handlers, schedule, tasks, users};
use crate::core::{config::Settings, metrics, state::AppState};

/// The router wrapped so trailing slashes are trimmed before route matching.
pub(crate) type App = NormalizePath<Router>;

pub(crate) fn router(state: AppState) -> App {
    let cors = build_cors_layer(state.settings());
    let api = Router::new()
        .route("/health", get(handlers::health))
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/tasks", tasks::router())
        .nest("/announcements", announcements::router())
        .nest("/schedule", schedule::router())
        .nest("/courses", courses::router());

    let request_id_header = HeaderName::from_static("x-request-id");
    let request_id_header_for_span = request_id_header.clone();
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(move |request: &Request<_>| {
            let request_id = request
                .headers()
                .get(&request_id_header_for_span)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_response(|response: &Response<axum::body::Body>, latency: Duration, _span: &Span| {
            metrics::record_response(response.status().as_u16(), latency);
        });

    let mut router: Router<AppState> = Router::new().nest("/api", api);

    if state.settings().telemetry().prometheus_enabled {
        router = router.route("/metrics", get(handlers::metrics));
    }

    let router = router
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins = settings
        .cors()
        .origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT, ORIGIN, HeaderName::from_static("x-request-id")])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::test_support;

    #[tokio::test]
    async fn health_reports_ok_without_database() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(Method::GET, "/api/health", None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = test_support::read_json(response).await;
        assert_eq!(body["status"], "ok");
        let timestamp = body["timestamp"].as_str().expect("timestamp");
        assert!(time::OffsetDateTime::parse(
            timestamp,
            &time::format_description::well_known::Rfc3339
        )
        .is_ok());
    }

    #[tokio::test]
    async fn trailing_slash_reaches_the_route() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(Method::GET, "/api/health/", None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = test_support::read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(Method::GET, "/api/nowhere", None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_disabled_returns_404() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(Method::GET, "/metrics", None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_json_uses_error_envelope() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::raw_request(Method::POST, "/api/auth/login", "{\"email\":"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::read_json(response).await;
        assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_storage() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/auth/register",
                Some(json!({ "name": "", "email": "ada@example.com", "password": "pw" })),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::read_json(response).await;
        assert!(body["error"].as_str().unwrap_or("").contains("name"));
    }

    #[tokio::test]
    async fn unknown_task_priority_is_rejected() {
        let ctx = test_support::offline_context().await;

        let response = ctx
            .app
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/tasks",
                Some(json!({ "title": "Essay", "priority": "urgent" })),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
