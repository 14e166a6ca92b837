//! Session store trait defining the interface for session persistence.

use crate::domain::value_objects::StoredSession;
use crate::errors::SessionError;

/// Port for the persisted session snapshot
///
/// The client-side analog of the browser's local storage: a single slot
/// holding the current session, or nothing. Operations are synchronous
/// because implementations are one small local read or write, and the store
/// is consulted on every outgoing request.
///
/// The store is shared between the session service (which writes it on
/// login and logout) and the HTTP layer (which reads the token for request
/// authorization and clears the slot when the server rejects it). All
/// writes go through these two paths only.
pub trait SessionStore: Send + Sync {
    /// Load the current snapshot, `None` when signed out
    fn load(&self) -> Result<Option<StoredSession>, SessionError>;

    /// Replace the snapshot
    fn save(&self, session: &StoredSession) -> Result<(), SessionError>;

    /// Remove the snapshot entirely
    fn clear(&self) -> Result<(), SessionError>;
}
