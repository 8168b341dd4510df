mod conflict;
mod error;
mod index;
mod locks;
mod mutations;
mod queries;

pub use error::EngineError;
pub use index::ReservationIndex;
pub use locks::ResourceLockTable;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::BookingId;
use crate::registry::Directory;

/// The reservation core: atomic check-then-commit booking, cancellation and
/// availability queries over a fleet of independently lockable resources.
///
/// Contention is scoped per resource id. Booking R001 never waits on R002;
/// for one resource, all `book`/`cancel` calls are totally ordered by lock
/// acquisition, which is what keeps the active set pairwise non-overlapping.
pub struct ReservationEngine {
    index: ReservationIndex,
    locks: ResourceLockTable,
    /// Booking ids are issued from here, starting at 1. Engine-owned, no
    /// process-wide statics.
    next_booking_id: AtomicU64,
    directory: Arc<dyn Directory>,
}

impl ReservationEngine {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            index: ReservationIndex::new(),
            locks: ResourceLockTable::new(),
            next_booking_id: AtomicU64::new(0),
            directory,
        }
    }

    fn next_id(&self) -> BookingId {
        self.next_booking_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn check_resource(&self, resource_id: &str) -> Result<(), EngineError> {
        if resource_id.is_empty() || !self.directory.resource_exists(resource_id) {
            return Err(EngineError::ResourceNotFound(resource_id.to_owned()));
        }
        Ok(())
    }

    fn check_requester(&self, requester_id: &str) -> Result<(), EngineError> {
        if requester_id.is_empty() || !self.directory.requester_exists(requester_id) {
            return Err(EngineError::RequesterNotFound(requester_id.to_owned()));
        }
        Ok(())
    }
}
