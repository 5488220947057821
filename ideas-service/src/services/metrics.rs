//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use crate::models::IdeaSource;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Called once from `main`. Without a global recorder the macros below are
/// no-ops unless a local recorder is in scope.
pub fn init_metrics() -> Result<(), String> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| "metrics handle already initialized".to_string())
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

pub fn record_ideas_generated(source: IdeaSource, count: usize) {
    counter!("ideas_generated_total", "source" => source.as_str()).increment(count as u64);
    counter!("idea_requests_total", "source" => source.as_str()).increment(1);
}

pub fn record_provider_failure(provider: &'static str) {
    counter!("provider_failures_total", "provider" => provider).increment(1);
}
