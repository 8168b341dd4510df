//! Resource reservation core.
//!
//! Grants exclusive, time-bounded use of a finite set of shared resources
//! (meeting rooms) to requesters (employees), and never double-books a
//! resource even under concurrent callers: every booking decision runs as
//! one critical section under that resource's own lock, so contention stays
//! scoped per resource while the fleet books in parallel.
//!
//! This is an embedded library — no wire protocol, no persistence. The
//! enclosing application supplies resource and requester identities through
//! [`registry::Directory`] and maps the [`engine::ReservationEngine`]
//! operations onto whatever outer API it needs.

pub mod engine;
pub mod model;
pub mod observability;
pub mod registry;

pub use engine::{EngineError, ReservationEngine, ReservationIndex, ResourceLockTable};
pub use model::{
    Booking, BookingId, BookingStatus, InvalidRange, Ms, RequesterId, ResourceId, TimeSlot,
};
pub use registry::{Directory, InMemoryDirectory, RequesterRecord, ResourceRecord};
