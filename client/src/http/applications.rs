//! Application endpoint implementations, including the multipart submit.

use async_trait::async_trait;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, info};

use jb_core::domain::entities::application::{Application, ApplicationStatus, MyApplication};
use jb_core::domain::entities::job::JobStats;
use jb_core::domain::value_objects::{ApplicationSubmission, FileDownload, FileUpload};
use jb_core::errors::DomainResult;
use jb_core::gateways::{ApplicationsGateway, SessionStore};

use super::client::{transport, ApiClient};

#[derive(Serialize)]
struct StatusUpdate {
    status: ApplicationStatus,
}

fn file_part(upload: &FileUpload) -> Part {
    Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone())
}

/// Pulls the file name out of a `Content-Disposition` header
///
/// The API sends `attachment; filename="report.pdf"`.
fn attachment_file_name(header: &str) -> Option<String> {
    let rest = header.split("filename=").nth(1)?;
    let name = rest
        .split(';')
        .next()
        .unwrap_or(rest)
        .trim()
        .trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

impl<S: SessionStore> ApiClient<S> {
    /// Downloads one of an application's attached files
    async fn fetch_file(&self, path: &str) -> DomainResult<FileDownload> {
        let response = self.send(self.request(Method::GET, path)).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name);
        let bytes = response.bytes().await.map_err(transport)?.to_vec();

        Ok(FileDownload::new(bytes, content_type, file_name))
    }
}

#[async_trait]
impl<S: SessionStore> ApplicationsGateway for ApiClient<S> {
    async fn submit(&self, submission: &ApplicationSubmission) -> DomainResult<Application> {
        info!(
            "POST /applications (job {}, resume {})",
            submission.job_id, submission.resume.file_name
        );

        let mut form = Form::new()
            .text("jobId", submission.job_id.to_string())
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("phoneNumber", submission.phone_number.clone())
            .part("resume", file_part(&submission.resume));
        if let Some(cover_letter) = &submission.cover_letter {
            form = form.part("coverLetter", file_part(cover_letter));
        }

        let request = self.request(Method::POST, "applications").multipart(form);
        self.fetch_json(request).await
    }

    async fn has_applied(&self, user_id: i64, job_id: i64) -> DomainResult<bool> {
        debug!("GET /applications/has-applied user={} job={}", user_id, job_id);
        let request = self
            .request(Method::GET, "applications/has-applied")
            .query(&[("userId", user_id), ("jobId", job_id)]);
        self.fetch_json(request).await
    }

    async fn my_applications(&self) -> DomainResult<Vec<MyApplication>> {
        debug!("GET /applications/me");
        self.fetch_json(self.request(Method::GET, "applications/me"))
            .await
    }

    async fn for_job(&self, job_id: i64) -> DomainResult<Vec<Application>> {
        debug!("GET /applications/jobs/{}/applications", job_id);
        let path = format!("applications/jobs/{}/applications", job_id);
        self.fetch_json(self.request(Method::GET, &path)).await
    }

    async fn for_employer(&self) -> DomainResult<Vec<Application>> {
        debug!("GET /applications/employer");
        self.fetch_json(self.request(Method::GET, "applications/employer"))
            .await
    }

    async fn job_stats(&self, job_id: i64) -> DomainResult<JobStats> {
        debug!("GET /applications/jobs/{}/stats", job_id);
        let path = format!("applications/jobs/{}/stats", job_id);
        self.fetch_json(self.request(Method::GET, &path)).await
    }

    async fn update_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> DomainResult<Application> {
        debug!("PATCH /applications/{}/status -> {}", application_id, status);
        let request = self
            .request(Method::PATCH, &format!("applications/{}/status", application_id))
            .json(&StatusUpdate { status });
        self.fetch_json(request).await
    }

    async fn download_resume(&self, application_id: i64) -> DomainResult<FileDownload> {
        debug!("GET /applications/{}/resume", application_id);
        self.fetch_file(&format!("applications/{}/resume", application_id))
            .await
    }

    async fn download_cover_letter(&self, application_id: i64) -> DomainResult<FileDownload> {
        debug!("GET /applications/{}/cover-letter", application_id);
        self.fetch_file(&format!("applications/{}/cover-letter", application_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_file_name_parsing() {
        assert_eq!(
            attachment_file_name(r#"attachment; filename="report.pdf""#),
            Some("report.pdf".to_string())
        );
        assert_eq!(
            attachment_file_name(r#"attachment; filename="cv.pdf"; size=1024"#),
            Some("cv.pdf".to_string())
        );
        // Unquoted form
        assert_eq!(
            attachment_file_name("attachment; filename=plain.pdf"),
            Some("plain.pdf".to_string())
        );
        assert_eq!(attachment_file_name("inline"), None);
        assert_eq!(attachment_file_name(r#"attachment; filename="""#), None);
    }
}
