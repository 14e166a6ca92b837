//! End-to-end walk through the application wizard.
//!
//! Signs in with the credentials from `JOBDESK_DEMO_EMAIL` and
//! `JOBDESK_DEMO_PASSWORD`, picks the newest job posting, and applies to it
//! with the resume at `JOBDESK_DEMO_RESUME` (a placeholder PDF is used when
//! the variable is unset).
//!
//! ```bash
//! JOBDESK_DEMO_EMAIL=jane@example.com \
//! JOBDESK_DEMO_PASSWORD=secret \
//! cargo run --example apply_flow
//! ```

use anyhow::{bail, Context, Result};
use tracing::info;

use jb_client::JobDeskClient;
use jb_core::domain::value_objects::{FileUpload, RejectionReason, SubmissionOutcome};
use jb_core::gateways::JobsGateway;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let client = JobDeskClient::from_env().context("failed to build the API client")?;

    // Sign in; the session file keeps the token for later runs
    let email = std::env::var("JOBDESK_DEMO_EMAIL").context("JOBDESK_DEMO_EMAIL is not set")?;
    let password =
        std::env::var("JOBDESK_DEMO_PASSWORD").context("JOBDESK_DEMO_PASSWORD is not set")?;
    let claims = client.session().login(&email, &password).await?;
    info!(
        "Signed in as {}",
        claims.name.as_deref().unwrap_or(&email)
    );

    // Pick the newest posting
    let page = client.api().latest(0, 5).await?;
    info!(
        "Latest postings ({} total):",
        page.total_elements
    );
    for job in &page.content {
        info!(
            "  #{} {} at {} ({})",
            job.id,
            job.title,
            job.company_name.as_deref().unwrap_or("unlisted company"),
            job.location
        );
    }
    let Some(job) = page.content.first() else {
        bail!("the job board has no postings to apply to");
    };

    if client.has_applied(job.id).await? {
        bail!("this account already applied to job #{}", job.id);
    }

    // Walk the wizard: contact info, resume, cover letter, review
    let mut wizard = client.start_application(job.id).await?;
    info!(
        "Applying to {} as {} ({})",
        wizard.job().title,
        wizard.draft().full_name,
        wizard.draft().phone_number()
    );

    if !wizard.draft().has_phone() {
        wizard.set_phone("15123456789")?;
    }
    wizard.advance()?;

    wizard.attach_resume(demo_resume()?)?;
    wizard.advance()?;

    // No cover letter for this run
    wizard.advance()?;

    info!("Review: submitting to job #{}", wizard.job().id);
    match wizard.submit().await? {
        SubmissionOutcome::Submitted(application) => {
            info!(
                "Application #{} submitted ({})",
                application.id, application.status
            );
        }
        SubmissionOutcome::Rejected(RejectionReason::AlreadyApplied) => {
            info!("The server says this account already applied");
        }
        SubmissionOutcome::Rejected(RejectionReason::Failed { status, message }) => {
            bail!(
                "submission failed ({}): {}",
                status.map_or_else(|| "no status".to_string(), |s| s.to_string()),
                message
            );
        }
    }

    Ok(())
}

/// The resume to attach, from `JOBDESK_DEMO_RESUME` or a built-in stub
fn demo_resume() -> Result<FileUpload> {
    match std::env::var("JOBDESK_DEMO_RESUME") {
        Ok(path) => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
            let name = std::path::Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "resume.pdf".to_string());
            Ok(FileUpload::new(name, bytes))
        }
        Err(_) => Ok(FileUpload::new(
            "resume.pdf",
            b"%PDF-1.4 demo resume".to_vec(),
        )),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
