use crate::model::{Booking, BookingId, ResourceId, TimeSlot};

use super::conflict::find_conflict;
use super::{EngineError, ReservationEngine};

impl ReservationEngine {
    /// Non-committing probe: would `slot` fit on `resource_id` right now?
    ///
    /// The answer is advisory. By the time the caller acts on it another
    /// task may have booked the slot; only `book` itself is authoritative.
    pub async fn is_available(
        &self,
        resource_id: &str,
        slot: TimeSlot,
    ) -> Result<bool, EngineError> {
        self.check_resource(resource_id)?;

        let lock = self.locks.lock_for(resource_id);
        let _guard = lock.lock().await;
        let active = self.index.find_active_by_resource(resource_id);
        Ok(find_conflict(&active, &slot).is_none())
    }

    /// Which of `resource_ids` could take `slot`. Each resource is checked
    /// under its own lock, so the aggregate is a point-in-time snapshot,
    /// not a joint guarantee across resources.
    pub async fn available_resources(
        &self,
        resource_ids: &[ResourceId],
        slot: TimeSlot,
    ) -> Result<Vec<ResourceId>, EngineError> {
        let mut free = Vec::with_capacity(resource_ids.len());
        for resource_id in resource_ids {
            if self.is_available(resource_id, slot).await? {
                free.push(resource_id.clone());
            }
        }
        Ok(free)
    }

    /// Full history for a resource — active and cancelled — ordered by slot
    /// start. Single index call; no resource lock needed.
    pub fn list_bookings_for_resource(&self, resource_id: &str) -> Vec<Booking> {
        self.index.find_by_resource(resource_id)
    }

    /// Full history for a requester, same ordering.
    pub fn list_bookings_for_requester(&self, requester_id: &str) -> Vec<Booking> {
        self.index.find_by_requester(requester_id)
    }

    pub fn booking(&self, booking_id: BookingId) -> Option<Booking> {
        self.index.get(booking_id)
    }

    /// Total bookings ever committed, cancelled ones included.
    pub fn booking_count(&self) -> usize {
        self.index.len()
    }
}
