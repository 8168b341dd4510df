use std::net::SocketAddr;

// ── Booking outcome counters ────────────────────────────────────

/// Counter: bookings committed.
pub const BOOKINGS_COMMITTED_TOTAL: &str = "slotlock_bookings_committed_total";

/// Counter: booking attempts rejected because the slot overlapped an
/// active booking.
pub const BOOKING_CONFLICTS_TOTAL: &str = "slotlock_booking_conflicts_total";

/// Counter: bookings cancelled (first cancel only; idempotent repeats
/// don't count).
pub const BOOKINGS_CANCELLED_TOTAL: &str = "slotlock_bookings_cancelled_total";

// ── Contention ──────────────────────────────────────────────────

/// Histogram: seconds spent waiting to acquire the per-resource lock
/// inside `book`.
pub const BOOK_LOCK_WAIT_SECONDS: &str = "slotlock_book_lock_wait_seconds";

/// Install a Prometheus metrics exporter on the given port. No-op if the
/// embedding application passes None or already runs its own recorder.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
