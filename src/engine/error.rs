use crate::model::{BookingId, InvalidRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Slot end not strictly after start.
    InvalidRange(InvalidRange),
    /// Resource id empty or unknown to the registry.
    ResourceNotFound(String),
    /// Requester id empty or unknown to the registry.
    RequesterNotFound(String),
    /// Booking id never issued by this engine.
    BookingNotFound(BookingId),
    /// Requested slot overlaps an existing ACTIVE booking on the resource.
    Conflict {
        resource_id: String,
        with: BookingId,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidRange(e) => write!(f, "{e}"),
            EngineError::ResourceNotFound(id) => write!(f, "resource not found: {id:?}"),
            EngineError::RequesterNotFound(id) => write!(f, "requester not found: {id:?}"),
            EngineError::BookingNotFound(id) => write!(f, "booking not found: {id}"),
            EngineError::Conflict { resource_id, with } => {
                write!(f, "slot conflicts with booking {with} on resource {resource_id}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<InvalidRange> for EngineError {
    fn from(e: InvalidRange) -> Self {
        EngineError::InvalidRange(e)
    }
}
