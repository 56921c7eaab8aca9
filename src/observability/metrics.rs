//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sink_ingest_messages_total` (counter): payloads accepted, by kind and transport
//! - `sink_ingest_bytes_total` (counter): payload bytes appended, by kind and transport
//! - `sink_write_errors_total` (counter): failed appends, by kind

use std::net::SocketAddr;

use metrics::{counter, describe_counter, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to install is logged and otherwise ignored; the `record_*`
/// functions stay no-ops in that case.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "sink_ingest_messages_total",
                "Payloads accepted, by kind and transport"
            );
            describe_counter!(
                "sink_ingest_bytes_total",
                Unit::Bytes,
                "Payload bytes appended to the raw files"
            );
            describe_counter!(
                "sink_write_errors_total",
                "Appends that failed, by kind"
            );
            tracing::info!(address = %addr, "Prometheus exporter listening");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install Prometheus exporter");
        }
    }
}

/// Record an accepted payload.
pub fn record_ingest(kind: &'static str, transport: &'static str, bytes: u64) {
    counter!("sink_ingest_messages_total", "kind" => kind, "transport" => transport).increment(1);
    counter!("sink_ingest_bytes_total", "kind" => kind, "transport" => transport).increment(bytes);
}

/// Record a failed append.
pub fn record_write_error(kind: &'static str) {
    counter!("sink_write_errors_total", "kind" => kind).increment(1);
}
