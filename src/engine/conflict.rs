use crate::model::{Booking, Ms, TimeSlot};

pub(crate) fn now_ms() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
}

/// First ACTIVE booking whose slot strictly overlaps `slot`, if any.
///
/// `active` is the current active set for one resource, read under that
/// resource's lock. Pure scan; the active set per resource is small and
/// already sorted by start.
pub(crate) fn find_conflict<'a>(active: &'a [Booking], slot: &TimeSlot) -> Option<&'a Booking> {
    active.iter().find(|b| b.slot.overlaps(slot))
}
