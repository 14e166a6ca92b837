//! Jobs gateway trait for the job board endpoints.

use async_trait::async_trait;

use crate::domain::entities::job::{Category, Company, Job, JobDraft, JobFilters};
use crate::errors::DomainResult;
use jb_shared::types::Page;

/// Gateway for the jobs and reference-data endpoints
#[async_trait]
pub trait JobsGateway: Send + Sync {
    /// Latest postings, newest first, paginated
    async fn latest(&self, page: u32, size: u32) -> DomainResult<Page<Job>>;

    /// Postings matching a filter set
    async fn search(&self, filters: &JobFilters) -> DomainResult<Vec<Job>>;

    /// Number of postings matching a filter set
    async fn count(&self, filters: &JobFilters) -> DomainResult<u64>;

    /// A single posting by id
    async fn by_id(&self, job_id: i64) -> DomainResult<Job>;

    /// The signed-in recruiter's own postings
    async fn mine(&self) -> DomainResult<Vec<Job>>;

    /// Create a posting
    async fn create(&self, draft: &JobDraft) -> DomainResult<Job>;

    /// Replace a posting
    async fn update(&self, job_id: i64, draft: &JobDraft) -> DomainResult<Job>;

    /// Delete a posting
    async fn delete(&self, job_id: i64) -> DomainResult<()>;

    /// All job categories
    async fn categories(&self) -> DomainResult<Vec<Category>>;

    /// All registered companies
    async fn companies(&self) -> DomainResult<Vec<Company>>;
}
