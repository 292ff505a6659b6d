//! Prometheus metrics for monitoring server health and activity.
//!
//! Counters cover HTTP traffic, sign-ins, request creation, and payment
//! outcomes. When no exporter is installed the macros are no-ops, so the
//! handlers can record unconditionally.

use metrics_exporter_prometheus::PrometheusBuilder;
use neighborly::catalog::Category;
use std::net::SocketAddr;

/// Initialize the Prometheus metrics exporter.
///
/// Sets up a scrape endpoint on the given address; metrics are served at
/// `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {e}"))
}

/// Record a completed HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!(
        "nh_http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a sign-in attempt and its outcome.
pub fn signins_total(outcome: &str) {
    metrics::counter!(
        "nh_signins_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Record a created help request.
pub fn requests_created_total(category: Category) {
    metrics::counter!(
        "nh_requests_created_total",
        "category" => category.to_string()
    )
    .increment(1);
}

/// Record a processed payment and its outcome.
pub fn payments_processed_total(outcome: &str) {
    metrics::counter!(
        "nh_payments_processed_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_no_ops_without_an_exporter() {
        http_requests_total("GET", "/health", 200);
        signins_total("accepted");
        requests_created_total(Category::Errands);
        payments_processed_total("completed");
    }
}
