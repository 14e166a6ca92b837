//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod files;
pub mod stored_session;
pub mod submission;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use files::{FileDownload, FileUpload};
pub use stored_session::StoredSession;
pub use submission::{ApplicationSubmission, RejectionReason, SubmissionOutcome};
