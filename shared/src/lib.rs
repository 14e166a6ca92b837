//! Shared utilities and common types for the JobDesk client
//!
//! This crate provides common functionality used across the client modules:
//! - Configuration types (API endpoint, session storage, environment)
//! - Utility functions (phone number handling, field validation)
//! - Common type definitions (pagination)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ClientConfig, Environment, StorageConfig};
pub use types::Page;
pub use utils::{phone, validation};
