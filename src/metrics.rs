use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const ANALYZE_REQUESTS: &str = "analyze_requests_total";
pub const ANALYZE_UNAVAILABLE: &str = "analyze_unavailable_total";
pub const ANALYZE_TOKENS: &str = "analyze_tokens";
pub const ANALYZE_DURATION_MS: &str = "analyze_duration_ms";

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process; later calls reuse it.
    pub fn init() -> anyhow::Result<Self> {
        let handle = HANDLE.get_or_try_init(|| {
            let handle = PrometheusBuilder::new().install_recorder()?;
            describe_counter!(ANALYZE_REQUESTS, "Analyses requested over HTTP.");
            describe_counter!(
                ANALYZE_UNAVAILABLE,
                "Analyses that failed because the sentiment engine was unavailable."
            );
            describe_histogram!(ANALYZE_TOKENS, "Tokens per analyzed text.");
            describe_histogram!(ANALYZE_DURATION_MS, "Analysis time in milliseconds.");
            Ok::<_, anyhow::Error>(handle)
        })?;
        Ok(Self {
            handle: handle.clone(),
        })
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
