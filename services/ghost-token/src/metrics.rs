//! Prometheus metrics for the Ghost Token Service.

use crate::error::TokenError;
use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec, TextEncoder};

/// Tokens issued counter.
pub static TOKENS_ISSUED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "ghost_token_tokens_issued_total",
        "Total number of admin tokens issued",
        &["algorithm"]
    )
    .expect("Failed to register tokens_issued metric")
});

/// Issuance failures counter.
pub static ISSUE_FAILURES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "ghost_token_issue_failures_total",
        "Total number of rejected or failed token requests",
        &["error_code"]
    )
    .expect("Failed to register issue_failures metric")
});

/// HTTP route latency histogram.
pub static HTTP_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "ghost_token_http_request_duration_seconds",
        "HTTP request latency in seconds",
        &["route"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register http_latency metric")
});

/// Record a token issuance.
pub fn record_token_issued(algorithm: &str) {
    TOKENS_ISSUED.with_label_values(&[algorithm]).inc();
}

/// Record a failed issuance.
pub fn record_issue_failure(error_code: &str) {
    ISSUE_FAILURES.with_label_values(&[error_code]).inc();
}

/// Record HTTP route latency.
pub fn record_http_latency(route: &str, duration_secs: f64) {
    HTTP_LATENCY.with_label_values(&[route]).observe(duration_secs);
}

/// Render all registered metrics in the Prometheus text format.
///
/// # Errors
///
/// Returns [`TokenError::Internal`] if encoding fails.
pub fn render() -> Result<String, TokenError> {
    // Touch the statics so they appear even before the first request.
    Lazy::force(&TOKENS_ISSUED);
    Lazy::force(&ISSUE_FAILURES);
    Lazy::force(&HTTP_LATENCY);

    TextEncoder::new()
        .encode_to_string(&prometheus::gather())
        .map_err(|e| TokenError::internal(format!("metrics encoding failed: {e}")))
}
