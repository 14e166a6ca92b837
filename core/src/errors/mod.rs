//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ApiError, SessionError, ValidationError, WizardError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

pub type DomainResult<T> = Result<T, DomainError>;
