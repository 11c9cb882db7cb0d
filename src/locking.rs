//! Per-project critical sections.
//!
//! Every read-then-write sequence that touches a project (membership checks
//! followed by inserts, role checks followed by task updates, request
//! decisions followed by membership writes) runs while holding the lease for
//! that project. Operations on different projects proceed in parallel.
//!
//! A slot lives only while some caller holds or awaits its lease, so leases
//! taken for unknown or deleted projects leave nothing behind.

use crate::project::domain::ProjectId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type Slots = HashMap<ProjectId, Arc<AsyncMutex<()>>>;

/// Registry of one async mutex per project.
#[derive(Debug, Default)]
pub struct ProjectLocks {
    slots: Arc<Mutex<Slots>>,
}

/// Exclusive lease over one project, released on drop.
#[derive(Debug)]
pub struct ProjectLease {
    project_id: ProjectId,
    slot: Arc<AsyncMutex<()>>,
    slots: Arc<Mutex<Slots>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl ProjectLease {
    /// Returns the project this lease covers.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }
}

impl Drop for ProjectLease {
    fn drop(&mut self) {
        drop(self.guard.take());
        // The map only holds `Arc`s, so a poisoned guard is still usable.
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let idle = slots.get(&self.project_id).is_some_and(|registered| {
            Arc::ptr_eq(registered, &self.slot) && Arc::strong_count(&self.slot) == 2
        });
        if idle {
            slots.remove(&self.project_id);
        }
    }
}

impl ProjectLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `project_id`.
    ///
    /// The lease is not re-entrant: acquiring the same project twice from one
    /// task deadlocks.
    pub async fn acquire(&self, project_id: ProjectId) -> ProjectLease {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(project_id).or_default())
        };
        let guard = Arc::clone(&slot).lock_owned().await;
        ProjectLease {
            project_id,
            slot,
            slots: Arc::clone(&self.slots),
            guard: Some(guard),
        }
    }

    /// Returns the number of projects with a held or awaited lease.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no lease is held or awaited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
