//! # JobDesk Core
//!
//! Core domain logic for the JobDesk client. This crate contains the domain
//! entities, the gateway interfaces to the remote API and local storage, the
//! session resolver, and the job application wizard that together form the
//! client's foundation.

pub mod domain;
pub mod errors;
pub mod gateways;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use gateways::*;
pub use services::*;
