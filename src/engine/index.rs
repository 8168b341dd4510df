use dashmap::DashMap;

use crate::model::{Booking, BookingId, BookingStatus, RequesterId, ResourceId};

use super::EngineError;

/// Process-lifetime store of every booking ever committed, with secondary
/// id lists by resource and by requester (insertion order).
///
/// Each call is internally synchronized and safe without external locking.
/// That is deliberately all it promises: the engine's read-active-then-insert
/// booking decision spans two calls and is serialized by the per-resource
/// lock, not here.
pub struct ReservationIndex {
    bookings: DashMap<BookingId, Booking>,
    by_resource: DashMap<ResourceId, Vec<BookingId>>,
    by_requester: DashMap<RequesterId, Vec<BookingId>>,
}

impl Default for ReservationIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationIndex {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            by_resource: DashMap::new(),
            by_requester: DashMap::new(),
        }
    }

    /// Append a booking to the primary store and both secondary indices.
    /// Ids are engine-assigned and unique; no duplicate check here.
    pub fn insert(&self, booking: Booking) {
        self.by_resource
            .entry(booking.resource_id.clone())
            .or_default()
            .push(booking.id);
        self.by_requester
            .entry(booking.requester_id.clone())
            .or_default()
            .push(booking.id);
        self.bookings.insert(booking.id, booking);
    }

    /// Flip the stored booking's status in place. Status is the only field
    /// that ever changes after commit.
    pub fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<(), EngineError> {
        let mut booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(EngineError::BookingNotFound(booking_id))?;
        booking.status = status;
        Ok(())
    }

    pub fn get(&self, booking_id: BookingId) -> Option<Booking> {
        self.bookings.get(&booking_id).map(|b| b.value().clone())
    }

    /// All bookings for a resource — active and cancelled — sorted by slot
    /// start, ties broken by id.
    pub fn find_by_resource(&self, resource_id: &str) -> Vec<Booking> {
        self.collect_sorted(&self.by_resource, resource_id)
    }

    /// All bookings made by a requester, same ordering.
    pub fn find_by_requester(&self, requester_id: &str) -> Vec<Booking> {
        self.collect_sorted(&self.by_requester, requester_id)
    }

    /// Only ACTIVE bookings for a resource — the conflict-detection input.
    pub fn find_active_by_resource(&self, resource_id: &str) -> Vec<Booking> {
        let mut active = self.find_by_resource(resource_id);
        active.retain(|b| b.status.is_active());
        active
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn collect_sorted(&self, ids: &DashMap<String, Vec<BookingId>>, key: &str) -> Vec<Booking> {
        let Some(entry) = ids.get(key) else {
            return Vec::new();
        };
        let mut found: Vec<Booking> = entry
            .iter()
            .filter_map(|id| self.bookings.get(id).map(|b| b.value().clone()))
            .collect();
        drop(entry);
        found.sort_by_key(|b| (b.slot.start(), b.id));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeSlot;

    fn booking(id: BookingId, resource: &str, requester: &str, start: i64, end: i64) -> Booking {
        Booking::new(
            id,
            resource,
            requester,
            TimeSlot::new(start, end).unwrap(),
            None,
            0,
        )
    }

    #[test]
    fn insert_and_find_by_resource() {
        let index = ReservationIndex::new();
        index.insert(booking(1, "R001", "E001", 100, 200));
        index.insert(booking(2, "R001", "E002", 300, 400));
        index.insert(booking(3, "R002", "E001", 100, 200));

        let r1 = index.find_by_resource("R001");
        assert_eq!(r1.len(), 2);
        assert_eq!(r1[0].id, 1);
        assert_eq!(r1[1].id, 2);
        assert_eq!(index.find_by_resource("R002").len(), 1);
        assert!(index.find_by_resource("R003").is_empty());
    }

    #[test]
    fn find_sorted_by_slot_start() {
        let index = ReservationIndex::new();
        // Inserted out of time order on purpose
        index.insert(booking(1, "R001", "E001", 500, 600));
        index.insert(booking(2, "R001", "E001", 100, 200));
        index.insert(booking(3, "R001", "E001", 300, 400));

        let starts: Vec<i64> = index
            .find_by_resource("R001")
            .iter()
            .map(|b| b.slot.start())
            .collect();
        assert_eq!(starts, vec![100, 300, 500]);
    }

    #[test]
    fn find_by_requester_spans_resources() {
        let index = ReservationIndex::new();
        index.insert(booking(1, "R001", "E001", 100, 200));
        index.insert(booking(2, "R002", "E001", 300, 400));
        index.insert(booking(3, "R001", "E002", 500, 600));

        let mine = index.find_by_requester("E001");
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].resource_id, "R001");
        assert_eq!(mine[1].resource_id, "R002");
    }

    #[test]
    fn update_status_filters_from_active() {
        let index = ReservationIndex::new();
        index.insert(booking(1, "R001", "E001", 100, 200));
        index.insert(booking(2, "R001", "E001", 300, 400));

        index.update_status(1, BookingStatus::Cancelled).unwrap();

        let active = index.find_active_by_resource("R001");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 2);
        // Cancelled booking is retained for history
        assert_eq!(index.find_by_resource("R001").len(), 2);
        assert_eq!(index.get(1).unwrap().status, BookingStatus::Cancelled);
    }

    #[test]
    fn update_status_unknown_id() {
        let index = ReservationIndex::new();
        let result = index.update_status(99, BookingStatus::Cancelled);
        assert!(matches!(result, Err(EngineError::BookingNotFound(99))));
    }
}
