use std::time::Instant;

use crate::model::{Booking, BookingId, BookingStatus, TimeSlot};
use crate::observability;

use super::conflict::{find_conflict, now_ms};
use super::{EngineError, ReservationEngine};

impl ReservationEngine {
    /// Reserve `resource_id` for `requester_id` over `slot`.
    ///
    /// The overlap check and the insert happen in one critical section under
    /// the resource's lock, so concurrent overlapping requests are decided
    /// in lock-acquisition order: one commits, the rest get `Conflict` and
    /// commit nothing. Requests on other resources proceed in parallel.
    pub async fn book(
        &self,
        requester_id: &str,
        resource_id: &str,
        slot: TimeSlot,
    ) -> Result<Booking, EngineError> {
        self.book_inner(requester_id, resource_id, slot, None).await
    }

    /// `book` with a human-readable tag carried on the booking.
    pub async fn book_labeled(
        &self,
        requester_id: &str,
        resource_id: &str,
        slot: TimeSlot,
        label: impl Into<String>,
    ) -> Result<Booking, EngineError> {
        self.book_inner(requester_id, resource_id, slot, Some(label.into()))
            .await
    }

    async fn book_inner(
        &self,
        requester_id: &str,
        resource_id: &str,
        slot: TimeSlot,
        label: Option<String>,
    ) -> Result<Booking, EngineError> {
        self.check_requester(requester_id)?;
        self.check_resource(resource_id)?;

        let lock = self.locks.lock_for(resource_id);
        let wait = Instant::now();
        let _guard = lock.lock().await;
        metrics::histogram!(observability::BOOK_LOCK_WAIT_SECONDS)
            .record(wait.elapsed().as_secs_f64());

        // Critical section: read the active set, decide, commit. Nothing in
        // here blocks on anything but this resource's lock.
        let active = self.index.find_active_by_resource(resource_id);
        if let Some(existing) = find_conflict(&active, &slot) {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            tracing::debug!(
                resource_id,
                with = existing.id,
                slot = %slot,
                "booking rejected: slot overlaps active booking"
            );
            return Err(EngineError::Conflict {
                resource_id: resource_id.to_owned(),
                with: existing.id,
            });
        }

        let booking = Booking::new(
            self.next_id(),
            resource_id,
            requester_id,
            slot,
            label,
            now_ms(),
        );
        self.index.insert(booking.clone());
        metrics::counter!(observability::BOOKINGS_COMMITTED_TOTAL).increment(1);
        tracing::debug!(
            resource_id,
            requester_id,
            booking_id = booking.id,
            slot = %slot,
            "booking committed"
        );
        Ok(booking)
    }

    /// Cancel a booking. Returns `true` on the transition ACTIVE→CANCELLED,
    /// `false` if the booking was already cancelled (idempotent no-op).
    ///
    /// Takes the booking's resource lock so the status flip serializes
    /// against `book` calls reading the active set at that instant.
    pub async fn cancel(&self, booking_id: BookingId) -> Result<bool, EngineError> {
        let booking = self
            .index
            .get(booking_id)
            .ok_or(EngineError::BookingNotFound(booking_id))?;

        let lock = self.locks.lock_for(&booking.resource_id);
        let _guard = lock.lock().await;

        // Status may have changed while we waited for the lock; the re-read
        // keeps repeated cancels a clean no-op.
        let current = self
            .index
            .get(booking_id)
            .ok_or(EngineError::BookingNotFound(booking_id))?;
        if !current.status.is_active() {
            return Ok(false);
        }

        self.index
            .update_status(booking_id, BookingStatus::Cancelled)?;
        metrics::counter!(observability::BOOKINGS_CANCELLED_TOTAL).increment(1);
        tracing::debug!(
            booking_id,
            resource_id = %booking.resource_id,
            "booking cancelled"
        );
        Ok(true)
    }
}
