//! Per-resource in-flight tracking for the call-site layer.
//!
//! The dispatcher is stateless and will happily send two overlapping toggles
//! for the same vault. Callers that must not do that hold an [`InFlightGuard`]
//! for the whole sign → dispatch round trip.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::shared::ResourceId;

/// Set of resource ids with an action currently in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlightSet {
    ids: Arc<Mutex<HashSet<ResourceId>>>,
}

impl InFlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as in flight. Returns `None` if it already is.
    pub fn try_acquire(&self, id: &ResourceId) -> Option<InFlightGuard> {
        if !self.lock().insert(id.clone()) {
            return None;
        }
        Some(InFlightGuard {
            ids: self.ids.clone(),
            id: id.clone(),
        })
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Critical sections never panic, so a poisoned set is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashSet<ResourceId>> {
        self.ids.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Releases its resource id when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<Mutex<HashSet<ResourceId>>>,
    id: ResourceId,
}

impl InFlightGuard {
    pub fn resource_id(&self) -> &ResourceId {
        &self.id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}
