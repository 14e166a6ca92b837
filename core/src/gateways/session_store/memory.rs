//! In-memory session store.

use std::sync::RwLock;

use crate::domain::value_objects::StoredSession;
use crate::errors::SessionError;

use super::r#trait::SessionStore;

/// Session store that lives and dies with the process
///
/// Used by the service tests and by embedders that do not want a session
/// surviving restarts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<StoredSession>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding a session
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        let slot = self.slot.read().map_err(poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        let mut slot = self.slot.write().map_err(poisoned)?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.slot.write().map_err(poisoned)?;
        *slot = None;
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> SessionError {
    SessionError::Storage {
        message: "session store lock poisoned".to_string(),
    }
}
