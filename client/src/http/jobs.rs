//! Jobs and reference data endpoint implementations.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use jb_core::domain::entities::job::{Category, Company, Job, JobDraft, JobFilters};
use jb_core::errors::DomainResult;
use jb_core::gateways::{JobsGateway, SessionStore};
use jb_shared::types::Page;

use super::client::ApiClient;

/// Query parameters shared by the search and count endpoints
///
/// Blank filter values are left out of the query string entirely; the
/// server treats an absent parameter as "no constraint" but an empty one
/// as a literal match.
fn base_params(filters: &JobFilters) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(keyword) = &filters.keyword {
        if !keyword.is_empty() {
            params.push(("keyword", keyword.clone()));
        }
    }
    if let Some(location) = &filters.location {
        if !location.is_empty() {
            params.push(("location", location.clone()));
        }
    }
    if let Some(job_type) = filters.job_type {
        params.push(("type", job_type.as_str().to_string()));
    }
    if let Some(category) = &filters.category {
        if !category.is_empty() {
            params.push(("category", category.clone()));
        }
    }
    params
}

/// Parameters for `GET /jobs/search`, where the salary bound is `minSalary`
fn search_params(filters: &JobFilters) -> Vec<(&'static str, String)> {
    let mut params = base_params(filters);
    if let Some(min_salary) = filters.min_salary {
        params.push(("minSalary", min_salary.to_string()));
    }
    params
}

/// Parameters for `GET /jobs/count`, where the same bound is named `salary`
fn count_params(filters: &JobFilters) -> Vec<(&'static str, String)> {
    let mut params = base_params(filters);
    if let Some(min_salary) = filters.min_salary {
        params.push(("salary", min_salary.to_string()));
    }
    params
}

#[async_trait]
impl<S: SessionStore> JobsGateway for ApiClient<S> {
    async fn latest(&self, page: u32, size: u32) -> DomainResult<Page<Job>> {
        debug!("GET /jobs/latest page={} size={}", page, size);
        let request = self
            .request(Method::GET, "jobs/latest")
            .query(&[("page", page), ("size", size)]);
        self.fetch_json(request).await
    }

    async fn search(&self, filters: &JobFilters) -> DomainResult<Vec<Job>> {
        debug!("GET /jobs/search");
        let request = self
            .request(Method::GET, "jobs/search")
            .query(&search_params(filters));
        self.fetch_json(request).await
    }

    async fn count(&self, filters: &JobFilters) -> DomainResult<u64> {
        debug!("GET /jobs/count");
        let request = self
            .request(Method::GET, "jobs/count")
            .query(&count_params(filters));
        self.fetch_json(request).await
    }

    async fn by_id(&self, job_id: i64) -> DomainResult<Job> {
        debug!("GET /jobs/{}", job_id);
        self.fetch_json(self.request(Method::GET, &format!("jobs/{}", job_id)))
            .await
    }

    async fn mine(&self) -> DomainResult<Vec<Job>> {
        debug!("GET /jobs/me");
        self.fetch_json(self.request(Method::GET, "jobs/me")).await
    }

    async fn create(&self, draft: &JobDraft) -> DomainResult<Job> {
        debug!("POST /jobs");
        self.fetch_json(self.request(Method::POST, "jobs").json(draft))
            .await
    }

    async fn update(&self, job_id: i64, draft: &JobDraft) -> DomainResult<Job> {
        debug!("PUT /jobs/{}", job_id);
        let request = self
            .request(Method::PUT, &format!("jobs/{}", job_id))
            .json(draft);
        self.fetch_json(request).await
    }

    async fn delete(&self, job_id: i64) -> DomainResult<()> {
        debug!("DELETE /jobs/{}", job_id);
        self.fetch_empty(self.request(Method::DELETE, &format!("jobs/{}", job_id)))
            .await
    }

    async fn categories(&self) -> DomainResult<Vec<Category>> {
        debug!("GET /categories");
        self.fetch_json(self.request(Method::GET, "categories"))
            .await
    }

    async fn companies(&self) -> DomainResult<Vec<Company>> {
        debug!("GET /companies");
        self.fetch_json(self.request(Method::GET, "companies"))
            .await
    }
}
