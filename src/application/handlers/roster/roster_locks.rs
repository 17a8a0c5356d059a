//! Per-roster mutual exclusion.
//!
//! Every mutating handler holds the roster's lock across
//! load → mutate → save → publish, so two joins on the same roster can never
//! interleave. Different rosters never contend. An entry lives only while
//! someone holds or waits on it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::RosterId;

type LockMap = Arc<Mutex<HashMap<RosterId, Arc<AsyncMutex<()>>>>>;

#[derive(Debug, Default)]
pub struct RosterLocks {
    locks: LockMap,
}

/// Exclusive access to one roster. Dropping it releases the roster and
/// removes its entry when nobody else is waiting.
#[derive(Debug)]
pub struct RosterGuard {
    id: RosterId,
    locks: LockMap,
    _guard: OwnedMutexGuard<()>,
}

impl RosterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to one roster.
    pub async fn acquire(&self, id: RosterId) -> RosterGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(id).or_default())
        };
        let guard = lock.lock_owned().await;
        RosterGuard {
            id,
            locks: Arc::clone(&self.locks),
            _guard: guard,
        }
    }

    /// Number of rosters with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for RosterGuard {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the map, one in this guard.
        let idle = locks
            .get(&self.id)
            .is_some_and(|lock| Arc::strong_count(lock) <= 2);
        if idle {
            locks.remove(&self.id);
        }
    }
}
