use std::fmt;

use serde::Serialize;

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Engine-assigned booking id, unique and monotonically increasing.
pub type BookingId = u64;

/// Opaque resource identifier supplied by the room registry (e.g. "R001").
pub type ResourceId = String;

/// Opaque requester identifier supplied by the employee registry.
pub type RequesterId = String;

/// Half-open interval `[start, end)`.
///
/// Construction is the only validation point: `end` must be strictly after
/// `start`. Fields are private so a slot can never be mutated into an
/// inverted range after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    start: Ms,
    end: Ms,
}

/// Rejected slot construction: `end` not strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub start: Ms,
    pub end: Ms,
}

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid time range: end {} not after start {}",
            self.end, self.start
        )
    }
}

impl std::error::Error for InvalidRange {}

impl TimeSlot {
    pub fn new(start: Ms, end: Ms) -> Result<Self, InvalidRange> {
        if end <= start {
            return Err(InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Ms {
        self.start
    }

    pub fn end(&self) -> Ms {
        self.end
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    /// Strict overlap — slots that merely touch at a boundary do not collide.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Inclusive start, exclusive end. Diagnostics only; conflict detection
    /// goes through `overlaps`.
    pub fn contains(&self, t: Ms) -> bool {
        self.start <= t && t < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Booking lifecycle. `Cancelled` is terminal; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl BookingStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Active)
    }
}

/// One reservation of one resource by one requester.
///
/// Owned by the `ReservationIndex` once committed; everything else holds
/// only the ids. `status` is the single mutable field and only the index
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub resource_id: ResourceId,
    pub requester_id: RequesterId,
    pub slot: TimeSlot,
    pub label: Option<String>,
    pub status: BookingStatus,
    pub created_at: Ms,
}

impl Booking {
    pub fn new(
        id: BookingId,
        resource_id: impl Into<ResourceId>,
        requester_id: impl Into<RequesterId>,
        slot: TimeSlot,
        label: Option<String>,
        created_at: Ms,
    ) -> Self {
        Self {
            id,
            resource_id: resource_id.into(),
            requester_id: requester_id.into(),
            slot,
            label,
            status: BookingStatus::Active,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_basics() {
        let s = TimeSlot::new(100, 200).unwrap();
        assert_eq!(s.duration_ms(), 100);
        assert!(s.contains(100));
        assert!(s.contains(199));
        assert!(!s.contains(200)); // half-open
        assert!(!s.contains(99));
    }

    #[test]
    fn slot_rejects_inverted_range() {
        let err = TimeSlot::new(200, 100).unwrap_err();
        assert_eq!(err, InvalidRange { start: 200, end: 100 });
    }

    #[test]
    fn slot_rejects_empty_range() {
        assert!(TimeSlot::new(100, 100).is_err());
    }

    #[test]
    fn slot_overlap() {
        let a = TimeSlot::new(100, 200).unwrap();
        let b = TimeSlot::new(150, 250).unwrap();
        let c = TimeSlot::new(200, 300).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn slot_overlap_containment() {
        let outer = TimeSlot::new(100, 400).unwrap();
        let inner = TimeSlot::new(150, 300).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.overlaps(&outer)); // self-overlap
    }

    #[test]
    fn slot_overlap_single_ms() {
        let a = TimeSlot::new(100, 201).unwrap();
        let b = TimeSlot::new(200, 300).unwrap();
        assert!(a.overlaps(&b));
    }

    #[test]
    fn booking_starts_active() {
        let slot = TimeSlot::new(0, 100).unwrap();
        let b = Booking::new(1, "R001", "E001", slot, None, 42);
        assert!(b.status.is_active());
        assert_eq!(b.created_at, 42);
    }
}
