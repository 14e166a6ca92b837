//! Session service module
//!
//! Resolves the current identity from the persisted bearer token and owns
//! every path that changes it:
//! - Password login and account registration
//! - OAuth callback token capture
//! - Logout
//! - Password reset requests

mod service;

#[cfg(test)]
mod tests;

pub use service::{SessionService, SessionState};
