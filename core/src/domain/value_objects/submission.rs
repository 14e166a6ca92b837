//! Application submission payload and terminal outcome.

use crate::domain::entities::application::Application;
use crate::domain::value_objects::files::FileUpload;
use crate::errors::{ApiError, DomainError};

/// Everything the submit endpoint needs, assembled from the wizard draft
/// and the session identity
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSubmission {
    /// Id of the job applied to
    pub job_id: i64,

    /// Applicant name from the form
    pub name: String,

    /// Applicant email from the session claims
    pub email: String,

    /// Full phone number (dial code + national number)
    pub phone_number: String,

    /// Resume file, always present
    pub resume: FileUpload,

    /// Cover letter file, optional
    pub cover_letter: Option<FileUpload>,
}

/// Terminal result of the application flow
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The API accepted the application
    Submitted(Application),

    /// The API turned the submission down
    Rejected(RejectionReason),
}

impl SubmissionOutcome {
    /// Whether the application went through
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted(_))
    }
}

/// Why a submission ended in the rejected outcome
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// The account already applied to this job
    AlreadyApplied,

    /// Anything else: transport failure, server error, bad payload
    Failed {
        status: Option<u16>,
        message: String,
    },
}

impl RejectionReason {
    /// Classifies a failed submit call
    ///
    /// The API signals a duplicate application as a 400 whose message reads
    /// "You already applied to this job."; everything else is a plain
    /// failure that keeps its status and message for display.
    pub fn classify(error: &DomainError) -> Self {
        match error {
            DomainError::Api(ApiError::Status { message, .. })
                if message.to_lowercase().contains("already applied") =>
            {
                RejectionReason::AlreadyApplied
            }
            DomainError::Api(ApiError::Status { status, message }) => RejectionReason::Failed {
                status: Some(*status),
                message: message.clone(),
            },
            other => RejectionReason::Failed {
                status: None,
                message: other.to_string(),
            },
        }
    }
}
