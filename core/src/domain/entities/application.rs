//! Job application entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    /// Waiting for the recruiter's decision
    Pending,
    /// Accepted by the recruiter
    Accepted,
    /// Turned down by the recruiter
    Rejected,
}

impl ApplicationStatus {
    /// Get the wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// Whether the recruiter has decided
    pub fn is_decided(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application as seen by the recruiter-side endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique identifier for the application
    pub id: i64,

    /// Stored path of the uploaded resume
    pub resume: String,

    /// Stored path of the cover letter, when one was attached
    pub cover_letter: Option<String>,

    /// Phone number the candidate entered in the form
    pub phone_number: Option<String>,

    /// Candidate display name
    pub candidate_name: String,

    /// Title of the job applied to
    pub job_title: Option<String>,

    /// Company the job belongs to
    pub company_name: Option<String>,

    /// When the application was submitted (server local time)
    pub applied_at: Option<NaiveDateTime>,

    /// Id of the job applied to
    pub job_id: i64,

    /// Id of the applying account
    pub user_id: i64,

    /// Review status
    pub status: ApplicationStatus,
}

/// Application row as seen by the candidate's own list
///
/// The API flattens job and company details into the row so the screen can
/// render without extra lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyApplication {
    /// Unique identifier for the application
    pub application_id: i64,

    /// Id of the job applied to
    pub job_id: i64,

    /// Title of the job applied to
    pub job_title: String,

    /// Stored path of the cover letter, when one was attached
    pub cover_letter: Option<String>,

    /// Stored path of the uploaded resume
    pub resume_path: Option<String>,

    /// When the application was submitted (server local time)
    pub applied_at: Option<NaiveDateTime>,

    /// Company the job belongs to
    pub company_name: Option<String>,

    /// Job location
    pub location: Option<String>,

    /// Review status
    pub status: ApplicationStatus,
}
