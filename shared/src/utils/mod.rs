//! Common utility functions

pub mod phone;
pub mod validation;

// Re-export commonly used utilities
pub use phone::*;
pub use validation::*;