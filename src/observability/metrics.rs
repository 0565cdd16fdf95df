//! Metrics collection and exposition.
//!
//! # Metrics
//! - `trace_log_records_total` (counter): structured records by severity
//! - `trace_log_plain_fallback_total` (counter): plain-text lines by reason
//! - `trace_log_requests_total` (counter): requests by whether a trace id was present
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::emit::Severity;

/// Install the Prometheus recorder with an HTTP scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics recorder"),
    }
}

/// Count one structured record.
pub fn record_emitted(severity: Severity) {
    ::metrics::counter!("trace_log_records_total", "severity" => severity.as_str()).increment(1);
}

/// Count one plain-text fallback line.
pub fn record_plain_fallback(reason: &'static str) {
    ::metrics::counter!("trace_log_plain_fallback_total", "reason" => reason).increment(1);
}

/// Count one inbound request.
pub fn record_request(correlated: bool) {
    let correlated = if correlated { "true" } else { "false" };
    ::metrics::counter!("trace_log_requests_total", "correlated" => correlated).increment(1);
}
