//! Job posting entity and related reference data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Employment type of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// Get the wire representation of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
        }
    }

    /// Human readable label for list screens
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job posting as returned by the jobs endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the posting
    pub id: i64,

    /// Posting title
    pub title: String,

    /// Full description text
    pub description: String,

    /// Work location
    pub location: String,

    /// Employment type
    #[serde(rename = "type")]
    pub job_type: JobType,

    /// Lower salary bound
    pub min_salary: Option<f64>,

    /// Upper salary bound
    pub max_salary: Option<f64>,

    /// Free-form salary text shown when no numeric range fits
    pub salary_text: Option<String>,

    /// Posting company display name
    pub company_name: Option<String>,

    /// Name of the recruiter who posted the job
    pub recruiter: Option<String>,

    /// Category display name
    pub category: Option<String>,

    /// When the posting was created (server local time, no zone)
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for creating or updating a posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_text: Option<String>,
    pub company_id: i64,
    pub category_id: i64,
}

/// Per-job applicant statistics for the recruiter dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub id: i64,
    pub title: String,
    pub available_positions: i64,
    pub accepted_count: i64,
    pub remaining_positions: i64,
}

/// Job category reference row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Company reference row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Filter set for the job search endpoints
///
/// Empty filters are omitted from the request entirely, matching how the
/// search screen builds its query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    /// Free text matched against title and description
    pub keyword: Option<String>,

    /// Location substring
    pub location: Option<String>,

    /// Employment type
    pub job_type: Option<JobType>,

    /// Category display name
    pub category: Option<String>,

    /// Minimum acceptable salary
    pub min_salary: Option<f64>,
}

impl JobFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter set with only a keyword
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    /// Whether no filter is set at all
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.location.is_none()
            && self.job_type.is_none()
            && self.category.is_none()
            && self.min_salary.is_none()
    }
}
