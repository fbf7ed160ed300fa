use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const SCORE_REQUESTS: &str = "aso_score_requests_total";
pub const VALIDATION_FAILURES: &str = "aso_validation_failures_total";
pub const COPY_SCORE: &str = "aso_copy_score";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. The recorder is process-wide,
    /// so later calls share the handle of the first one.
    pub fn init() -> anyhow::Result<Self> {
        static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();
        let handle = HANDLE
            .get_or_try_init(|| {
                PrometheusBuilder::new()
                    .install_recorder()
                    .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))
            })?
            .clone();
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(SCORE_REQUESTS, "Scoring requests by endpoint.");
        describe_counter!(
            VALIDATION_FAILURES,
            "Requests rejected before scoring (caption count, blank app name)."
        );
        describe_histogram!(COPY_SCORE, "Overall copy score (0-100) of scored requests.");
    });
}

/// Without an installed recorder these are no-ops.
pub fn record_scored(endpoint: &'static str, score: u32) {
    counter!(SCORE_REQUESTS, "endpoint" => endpoint).increment(1);
    histogram!(COPY_SCORE).record(f64::from(score));
}

pub fn record_rejected(endpoint: &'static str) {
    counter!(VALIDATION_FAILURES, "endpoint" => endpoint).increment(1);
}
