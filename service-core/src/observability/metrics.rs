//! Prometheus exposition for the `metrics` facade.

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

use crate::error::AppError;

/// Bucket bounds (seconds) for `http_request_duration_seconds`.
const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static METRICS_HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

fn install_recorder() -> Result<PrometheusHandle, String> {
    let recorder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )
        .map_err(|e| e.to_string())?
        .build_recorder();
    let handle = recorder.handle();

    ::metrics::set_global_recorder(recorder)
        .map_err(|_| "another global metrics recorder is already installed".to_string())?;

    Ok(handle)
}

/// Installs the global Prometheus recorder. Concurrent and repeated calls share one install.
pub fn init_metrics() -> Result<(), AppError> {
    METRICS_HANDLE
        .get_or_init(install_recorder)
        .as_ref()
        .map(|_| ())
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "failed to install Prometheus recorder: {}",
                e
            ))
        })
}

/// Metrics in Prometheus text format.
pub fn render_metrics() -> String {
    match METRICS_HANDLE.get() {
        Some(Ok(handle)) => handle.render(),
        _ => "# Metrics recorder not initialized\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::metrics::histogram;

    #[test]
    fn concurrent_initialisation_succeeds_everywhere() {
        let results: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(init_metrics))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(results.iter().all(|r| r.is_ok()));
        assert!(init_metrics().is_ok());
    }

    #[test]
    fn request_latency_renders_as_histogram() {
        init_metrics().unwrap();
        histogram!("http_request_duration_seconds", "path" => "/latency-test").record(0.02);

        let rendered = render_metrics();
        assert!(rendered.contains("http_request_duration_seconds_bucket{"));
        assert!(rendered.contains(r#"le="0.025""#));
    }
}
