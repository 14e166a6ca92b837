//! File-backed session store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use jb_core::domain::value_objects::StoredSession;
use jb_core::errors::SessionError;
use jb_core::gateways::SessionStore;
use jb_shared::config::StorageConfig;

/// Session store persisting the snapshot as a JSON file
///
/// The client-side stand-in for browser local storage. A missing file is a
/// signed-out session, not an error; unreadable content is treated the
/// same way after a warning, so a damaged file never locks the user out of
/// signing in again.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the configured session file location
    ///
    /// Reads `JOBDESK_SESSION_FILE`, falling back to
    /// `~/.jobdesk/session.json`.
    pub fn from_env() -> Self {
        Self::new(StorageConfig::from_env().session_path)
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(storage_error("read", &self.path, err)),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(
                    "Session file {} is unreadable, treating as signed out: {}",
                    self.path.display(),
                    err
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| storage_error("create directory for", &self.path, err))?;
        }

        let json = serde_json::to_string_pretty(session).map_err(|err| SessionError::Storage {
            message: format!("failed to encode session: {}", err),
        })?;
        fs::write(&self.path, json).map_err(|err| storage_error("write", &self.path, err))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session file {} removed", self.path.display());
                Ok(())
            }
            // Already signed out
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", &self.path, err)),
        }
    }
}

fn storage_error(action: &str, path: &Path, err: io::Error) -> SessionError {
    SessionError::Storage {
        message: format!("failed to {} {}: {}", action, path.display(), err),
    }
}
