use dashmap::DashMap;
use serde::Serialize;

use crate::model::{RequesterId, ResourceId};

/// Lookup surface the engine needs from the enclosing application: whether
/// a resource or requester id resolves. The engine treats both registries
/// as read-only; it never creates, mutates, or owns their entries.
pub trait Directory: Send + Sync {
    fn resource_exists(&self, resource_id: &str) -> bool;
    fn requester_exists(&self, requester_id: &str) -> bool;
}

/// A bookable resource as the room registry describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub id: ResourceId,
    pub label: Option<String>,
    pub capacity: u32,
}

/// A requester as the employee registry describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequesterRecord {
    pub id: RequesterId,
    pub name: String,
}

/// In-memory directory for tests, demos and small embeddings. Larger hosts
/// implement `Directory` over whatever store they already have.
pub struct InMemoryDirectory {
    resources: DashMap<ResourceId, ResourceRecord>,
    requesters: DashMap<RequesterId, RequesterRecord>,
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            resources: DashMap::new(),
            requesters: DashMap::new(),
        }
    }

    pub fn add_resource(&self, record: ResourceRecord) {
        self.resources.insert(record.id.clone(), record);
    }

    pub fn add_requester(&self, record: RequesterRecord) {
        self.requesters.insert(record.id.clone(), record);
    }

    pub fn get_resource(&self, resource_id: &str) -> Option<ResourceRecord> {
        self.resources.get(resource_id).map(|r| r.value().clone())
    }

    pub fn get_requester(&self, requester_id: &str) -> Option<RequesterRecord> {
        self.requesters.get(requester_id).map(|r| r.value().clone())
    }

    /// Every known resource id, in no particular order. The usual input to
    /// `ReservationEngine::available_resources`.
    pub fn resource_ids(&self) -> Vec<ResourceId> {
        self.resources.iter().map(|e| e.key().clone()).collect()
    }
}

impl Directory for InMemoryDirectory {
    fn resource_exists(&self, resource_id: &str) -> bool {
        self.resources.contains_key(resource_id)
    }

    fn requester_exists(&self, requester_id: &str) -> bool {
        self.requesters.contains_key(requester_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_lookups() {
        let dir = InMemoryDirectory::new();
        dir.add_resource(ResourceRecord {
            id: "R001".into(),
            label: Some("Room 1".into()),
            capacity: 8,
        });
        dir.add_requester(RequesterRecord {
            id: "E001".into(),
            name: "Naman".into(),
        });

        assert!(dir.resource_exists("R001"));
        assert!(!dir.resource_exists("R002"));
        assert!(dir.requester_exists("E001"));
        assert!(!dir.requester_exists(""));
        assert_eq!(dir.get_resource("R001").unwrap().capacity, 8);
        assert_eq!(dir.resource_ids(), vec!["R001".to_string()]);
    }
}
