//! AuditSlotRegistry - At most one in-flight audit per browser session

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::foundation::SessionId;

/// The session already has an audit in flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("an audit is already running for session {0}")]
pub struct SlotBusy(pub SessionId);

/// Tracks which sessions have an audit in flight.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct AuditSlotRegistry {
    in_flight: Arc<Mutex<HashSet<SessionId>>>,
}

impl AuditSlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the session's slot until the returned guard is dropped.
    pub fn try_acquire(&self, session_id: SessionId) -> Result<AuditSlot, SlotBusy> {
        if !self.lock().insert(session_id) {
            return Err(SlotBusy(session_id));
        }

        Ok(AuditSlot {
            registry: self.in_flight.clone(),
            session_id,
        })
    }

    /// Returns true if the session has an audit in flight.
    pub fn is_busy(&self, session_id: &SessionId) -> bool {
        self.lock().contains(session_id)
    }

    /// Number of sessions with an audit in flight.
    pub fn in_flight(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<SessionId>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Reservation of a session's audit slot. Released on drop.
#[derive(Debug)]
pub struct AuditSlot {
    registry: Arc<Mutex<HashSet<SessionId>>>,
    session_id: SessionId,
}

impl AuditSlot {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}

impl Drop for AuditSlot {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.session_id);
    }
}
