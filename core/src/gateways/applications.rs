//! Applications gateway trait for the application endpoints.

use async_trait::async_trait;

use crate::domain::entities::application::{Application, ApplicationStatus, MyApplication};
use crate::domain::entities::job::JobStats;
use crate::domain::value_objects::{ApplicationSubmission, FileDownload};
use crate::errors::DomainResult;

/// Gateway for the application endpoints, both candidate and recruiter side
#[async_trait]
pub trait ApplicationsGateway: Send + Sync {
    /// Submit an application (multipart upload with the resume and the
    /// optional cover letter)
    async fn submit(&self, submission: &ApplicationSubmission) -> DomainResult<Application>;

    /// Whether the account already applied to the job
    async fn has_applied(&self, user_id: i64, job_id: i64) -> DomainResult<bool>;

    /// The candidate's own applications
    async fn my_applications(&self) -> DomainResult<Vec<MyApplication>>;

    /// Applications received for one of the recruiter's jobs
    async fn for_job(&self, job_id: i64) -> DomainResult<Vec<Application>>;

    /// Applications across all of the recruiter's jobs
    async fn for_employer(&self) -> DomainResult<Vec<Application>>;

    /// Applicant statistics for a job
    async fn job_stats(&self, job_id: i64) -> DomainResult<JobStats>;

    /// Accept or reject an application
    async fn update_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> DomainResult<Application>;

    /// Download the resume attached to an application
    async fn download_resume(&self, application_id: i64) -> DomainResult<FileDownload>;

    /// Download the cover letter attached to an application
    async fn download_cover_letter(&self, application_id: i64) -> DomainResult<FileDownload>;
}
