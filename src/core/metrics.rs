use std::sync::OnceLock;
use std::time::Duration;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

const REQUESTS_TOTAL: &str = "http_requests_total";
const REQUEST_DURATION: &str = "http_request_duration_seconds";

const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// No-op when disabled or already installed (tests build many routers).
pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled || PROM_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(REQUEST_DURATION.to_string()), LATENCY_BUCKETS)?
        .install_recorder()?;
    metrics::describe_counter!(REQUESTS_TOTAL, "HTTP responses by status code");
    metrics::describe_histogram!(
        REQUEST_DURATION,
        metrics::Unit::Seconds,
        "HTTP request latency by status code"
    );
    let _ = PROM_HANDLE.set(handle);
    Ok(())
}

pub(crate) fn record_response(status: u16, latency: Duration) {
    let status = status.to_string();
    metrics::counter!(REQUESTS_TOTAL, "status" => status.clone()).increment(1);
    metrics::histogram!(REQUEST_DURATION, "status" => status).record(latency.as_secs_f64());
}

pub(crate) fn render() -> Option<String> {
    PROM_HANDLE.get().map(|handle| handle.render())
}
