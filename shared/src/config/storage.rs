//! Local session storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session storage configuration
///
/// The client persists the current session (bearer token plus the identity
/// fields derived from it) as a single JSON file, the desktop analog of the
/// browser's local storage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the session snapshot file
    pub session_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
        }
    }
}

impl StorageConfig {
    /// Create a configuration for a specific session file
    pub fn new(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// - `JOBDESK_SESSION_FILE` - session file path (defaults to
    ///   `~/.jobdesk/session.json`)
    pub fn from_env() -> Self {
        let session_path = std::env::var("JOBDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_path());

        Self { session_path }
    }
}

fn default_session_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobdesk")
        .join("session.json")
}
