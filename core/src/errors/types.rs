//! Domain-specific error types for session, validation, and API operations.

use thiserror::Error;

/// Session-related errors
///
/// These cover the persisted credential lifecycle: an absent or expired
/// session, a token whose payload cannot be read, and failures of the local
/// snapshot storage.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No active session")]
    NotAuthenticated,

    #[error("Session expired")]
    Expired,

    #[error("Malformed session token")]
    MalformedToken,

    #[error("Session storage failure: {message}")]
    Storage { message: String },
}

/// Input validation errors
///
/// Raised by the wizard step guards. The message is the user-facing text
/// the form shows next to the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{message}")]
    RequiredField { field: String, message: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    /// Shorthand for a missing required field
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the remote API gateway
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The server rejected the credential; the session has been torn down
    #[error("Authentication rejected")]
    AuthRejected,

    /// Non-success response, with the server's message when it sent one
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Unexpected response body: {message}")]
    Decode { message: String },
}

/// Application wizard transition errors
#[derive(Error, Debug)]
pub enum WizardError {
    /// A step guard refused the transition
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backward navigation from the first stage
    #[error("Cannot go back from {stage}")]
    NoPreviousStage { stage: String },

    /// Forward navigation past the review stage
    #[error("Cannot advance from {stage}")]
    NoNextStage { stage: String },

    /// Submission attempted before the review stage
    #[error("Submission is only available from the review stage")]
    NotReadyToSubmit,

    /// The flow already reached its terminal stage
    #[error("Application flow already completed")]
    AlreadyCompleted,
}
