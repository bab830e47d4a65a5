//! In-process request metrics.
//!
//! Counters follow the shape of a metrics exporter (request totals by status
//! class plus cumulative latency) without pulling one in; the snapshot is
//! served as JSON by the metrics endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;

/// Atomic request counters shared across handlers
#[derive(Debug, Default)]
pub struct RequestMetrics {
    requests_total: AtomicU64,
    responses_2xx: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
    latency_micros_total: AtomicU64,
}

impl RequestMetrics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request.
    pub fn record(&self, status: StatusCode, latency: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.latency_micros_total
            .fetch_add(latency.as_micros() as u64, Ordering::Relaxed);

        match status.as_u16() {
            200..=299 => self.responses_2xx.fetch_add(1, Ordering::Relaxed),
            400..=499 => self.responses_4xx.fetch_add(1, Ordering::Relaxed),
            500..=599 => self.responses_5xx.fetch_add(1, Ordering::Relaxed),
            _ => 0,
        };
    }

    /// Snapshot for the metrics endpoint.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests_total = self.requests_total.load(Ordering::Relaxed);
        let latency_micros = self.latency_micros_total.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total,
            responses_2xx: self.responses_2xx.load(Ordering::Relaxed),
            responses_4xx: self.responses_4xx.load(Ordering::Relaxed),
            responses_5xx: self.responses_5xx.load(Ordering::Relaxed),
            average_latency_micros: if requests_total == 0 {
                0
            } else {
                latency_micros / requests_total
            },
        }
    }
}

/// Point-in-time view of the request counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub responses_2xx: u64,
    pub responses_4xx: u64,
    pub responses_5xx: u64,
    pub average_latency_micros: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_buckets_by_status_class() {
        let metrics = RequestMetrics::new();

        metrics.record(StatusCode::OK, Duration::from_micros(100));
        metrics.record(StatusCode::CREATED, Duration::from_micros(100));
        metrics.record(StatusCode::NOT_FOUND, Duration::from_micros(100));
        metrics.record(StatusCode::INTERNAL_SERVER_ERROR, Duration::from_micros(100));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 4);
        assert_eq!(snapshot.responses_2xx, 2);
        assert_eq!(snapshot.responses_4xx, 1);
        assert_eq!(snapshot.responses_5xx, 1);
        assert_eq!(snapshot.average_latency_micros, 100);
    }

    #[test]
    fn test_empty_snapshot_has_zero_average() {
        let snapshot = RequestMetrics::new().snapshot();
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.average_latency_micros, 0);
    }
}
