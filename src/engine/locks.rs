use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::model::ResourceId;

/// One mutual-exclusion lock per resource id, shared by every caller.
///
/// The lock for a given id must be created exactly once: two first-callers
/// racing through a plain contains-then-insert would each get their own
/// mutex and silently stop excluding each other. `DashMap::entry` performs
/// the insert-if-absent atomically under the shard lock, so all callers
/// observe the same `Arc`.
///
/// Locks are never evicted — the resource set is bounded and admin-managed,
/// so a mutex per resource for the process lifetime is acceptable.
pub struct ResourceLockTable {
    locks: DashMap<ResourceId, Arc<Mutex<()>>>,
}

impl Default for ResourceLockTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLockTable {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Return the unique lock for `resource_id`, creating it on first use.
    pub fn lock_for(&self, resource_id: &str) -> Arc<Mutex<()>> {
        let lock = self
            .locks
            .entry(resource_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        // Two distinct mutexes for one id would be a defect in this table,
        // not a recoverable condition.
        debug_assert!(
            self.locks
                .get(resource_id)
                .is_some_and(|entry| Arc::ptr_eq(&lock, entry.value())),
            "lock table produced divergent locks for resource {resource_id}"
        );
        lock
    }

    /// Number of resource ids that have been locked at least once.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
