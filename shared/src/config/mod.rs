//! Configuration module with client-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - Remote API endpoint and HTTP client configuration
//! - `environment` - Environment detection
//! - `storage` - Local session storage location

pub mod api;
pub mod environment;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::ApiConfig;
pub use environment::Environment;
pub use storage::StorageConfig;

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Remote API configuration
    pub api: ApiConfig,

    /// Session storage configuration
    pub storage: StorageConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads the `.env` file for the detected environment first, so a
    /// development checkout can keep its settings in `.env.development`.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let _ = dotenvy::from_filename(environment.env_file());

        Self {
            environment,
            api: ApiConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
