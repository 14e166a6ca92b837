//! Main application wizard implementation

use std::sync::Arc;
use tracing::{debug, info, warn};

use jb_shared::utils::phone::{digits_only, mask_phone, CountryCode};
use jb_shared::utils::validation::not_blank;

use crate::domain::entities::job::Job;
use crate::domain::entities::session::SessionClaims;
use crate::domain::value_objects::{
    ApplicationSubmission, FileUpload, RejectionReason, SubmissionOutcome,
};
use crate::errors::{DomainResult, SessionError, ValidationError, WizardError};
use crate::gateways::{ApplicationsGateway, JobsGateway, ProfileGateway};

use super::draft::ApplicationDraft;
use super::state::WizardStage;

/// The five-step application flow for one job
///
/// The wizard owns the draft and the stage; every transition is an explicit
/// method call that either moves the stage or returns why it will not.
/// Overlapping transitions cannot happen because every mutation takes
/// `&mut self`.
///
/// One instance covers one attempt for one job. After the single
/// submission the wizard is completed for good; applying again means
/// starting a new one.
pub struct ApplicationWizard<P, A>
where
    P: ProfileGateway,
    A: ApplicationsGateway,
{
    /// Profile gateway, used for the one phone prefill attempt
    profile: Arc<P>,
    /// Applications gateway, used for the one submission
    applications: Arc<A>,
    /// The job being applied to
    job: Job,
    /// Claims of the signed-in applicant
    claims: SessionClaims,
    /// Current stage
    stage: WizardStage,
    /// Draft collected across the steps
    draft: ApplicationDraft,
    /// Terminal outcome once completed
    outcome: Option<SubmissionOutcome>,
    /// Whether the one prefill attempt has been spent
    prefill_attempted: bool,
}

impl<P, A> ApplicationWizard<P, A>
where
    P: ProfileGateway,
    A: ApplicationsGateway,
{
    /// Start the flow for a job
    ///
    /// This method:
    /// 1. Refuses an expired session
    /// 2. Fetches the job once (the review step reads it back)
    /// 3. Seeds the applicant name from the session claims
    /// 4. Makes the one best-effort phone prefill attempt
    ///
    /// # Arguments
    ///
    /// * `jobs` - Jobs gateway, borrowed only to fetch the posting
    /// * `profile` - Profile gateway for the phone prefill
    /// * `applications` - Applications gateway for the submission
    /// * `claims` - Claims of the signed-in applicant
    /// * `job_id` - The job to apply to
    ///
    /// # Returns
    ///
    /// * `Ok(ApplicationWizard)` - A wizard on the contact info step
    /// * `Err(DomainError)` - If the session is expired or the job fetch fails
    pub async fn start<J: JobsGateway>(
        jobs: &J,
        profile: Arc<P>,
        applications: Arc<A>,
        claims: SessionClaims,
        job_id: i64,
    ) -> DomainResult<Self> {
        // Step 1: Only an unexpired session may apply
        if claims.is_expired() {
            return Err(SessionError::Expired.into());
        }

        // Step 2: Fetch the job once
        let job = jobs.by_id(job_id).await?;

        // Step 3: Seed the name from the claims
        let mut draft = ApplicationDraft::default();
        if let Some(name) = &claims.name {
            draft.full_name = name.clone();
        }

        let mut wizard = Self {
            profile,
            applications,
            job,
            claims,
            stage: WizardStage::ContactInfo,
            draft,
            outcome: None,
            prefill_attempted: false,
        };

        // Step 4: Best-effort phone prefill
        wizard.prefill_phone().await;

        debug!("Application wizard started for job {}", wizard.job.id);
        Ok(wizard)
    }

    /// Current stage
    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    /// The job being applied to
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// The draft as collected so far
    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Terminal outcome, present once the flow completed
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    /// Whether the flow reached its terminal stage
    pub fn is_completed(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Whether the phone prefill attempt has been spent
    pub fn prefill_attempted(&self) -> bool {
        self.prefill_attempted
    }

    /// Set the applicant name
    pub fn set_full_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.full_name = name.into();
        Ok(())
    }

    /// Select a dial code
    pub fn set_country_code(&mut self, code: CountryCode) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.country_code = code;
        Ok(())
    }

    /// Set the national phone number
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.phone = phone.into();
        Ok(())
    }

    /// Attach (or replace) the resume file
    pub fn attach_resume(&mut self, file: FileUpload) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.resume = Some(file);
        Ok(())
    }

    /// Attach (or replace) the cover letter file
    pub fn attach_cover_letter(&mut self, file: FileUpload) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.cover_letter = Some(file);
        Ok(())
    }

    /// Drop the cover letter; the step passes without one
    pub fn clear_cover_letter(&mut self) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.draft.cover_letter = None;
        Ok(())
    }

    /// Move forward one step
    ///
    /// Each forward transition passes through its guard; a refusal leaves
    /// the stage unchanged and says which field blocked it.
    ///
    /// # Returns
    ///
    /// * `Ok(WizardStage)` - The stage after the move
    /// * `Err(WizardError)` - Guard refusal, or no next stage exists
    pub fn advance(&mut self) -> Result<WizardStage, WizardError> {
        match self.stage {
            WizardStage::ContactInfo => {
                self.validate_contact_info()?;
                self.stage = WizardStage::Resume;
            }
            WizardStage::Resume => {
                if self.draft.resume.is_none() {
                    return Err(
                        ValidationError::required("resume", "Please upload your CV.").into()
                    );
                }
                self.stage = WizardStage::CoverLetter;
            }
            // The cover letter is optional; this step never blocks
            WizardStage::CoverLetter => self.stage = WizardStage::Review,
            WizardStage::Review => {
                return Err(WizardError::NoNextStage {
                    stage: self.stage.to_string(),
                })
            }
            WizardStage::Completed => return Err(WizardError::AlreadyCompleted),
        }

        debug!("Advanced to step {} ({})", self.stage.step_number(), self.stage);
        Ok(self.stage)
    }

    /// Move back one step, keeping every draft field
    pub fn back(&mut self) -> Result<WizardStage, WizardError> {
        if self.stage.is_terminal() {
            return Err(WizardError::AlreadyCompleted);
        }
        match self.stage.previous() {
            Some(previous) => {
                self.stage = previous;
                debug!("Went back to step {} ({})", self.stage.step_number(), self.stage);
                Ok(self.stage)
            }
            None => Err(WizardError::NoPreviousStage {
                stage: self.stage.to_string(),
            }),
        }
    }

    /// Submit the application
    ///
    /// Only available on the review step. Exactly one upload happens; the
    /// flow then terminates whichever way the call resolves, with the API's
    /// verdict absorbed into the outcome. There is no retry from here.
    ///
    /// # Returns
    ///
    /// * `Ok(SubmissionOutcome)` - Submitted or rejected, now also readable
    ///   via [`ApplicationWizard::outcome`]
    /// * `Err(DomainError)` - The submission was never attempted (wrong
    ///   stage, or the flow already completed)
    pub async fn submit(&mut self) -> DomainResult<SubmissionOutcome> {
        // Step 1: Submission only exists on the review step
        match self.stage {
            WizardStage::Review => {}
            WizardStage::Completed => return Err(WizardError::AlreadyCompleted.into()),
            _ => return Err(WizardError::NotReadyToSubmit.into()),
        }

        // Step 2: Assemble the payload from the draft and the session identity
        let resume = self
            .draft
            .resume
            .clone()
            .ok_or_else(|| ValidationError::required("resume", "Please upload your CV."))?;
        let submission = ApplicationSubmission {
            job_id: self.job.id,
            name: self.draft.full_name.trim().to_string(),
            email: self
                .claims
                .account_email()
                .unwrap_or_default()
                .to_string(),
            phone_number: self.draft.phone_number(),
            resume,
            cover_letter: self.draft.cover_letter.clone(),
        };

        // Step 3: One attempt, then the flow terminates either way
        let outcome = match self.applications.submit(&submission).await {
            Ok(application) => {
                info!("Application submitted for job {}", self.job.id);
                SubmissionOutcome::Submitted(application)
            }
            Err(err) => {
                warn!("Application for job {} not accepted: {}", self.job.id, err);
                SubmissionOutcome::Rejected(RejectionReason::classify(&err))
            }
        };

        self.stage = WizardStage::Completed;
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Contact info guard: name and phone must both have content
    fn validate_contact_info(&self) -> Result<(), ValidationError> {
        if !not_blank(&self.draft.full_name) {
            return Err(ValidationError::required("name", "Name is required."));
        }
        if !self.draft.has_phone() {
            return Err(ValidationError::required("phone", "Phone number is required."));
        }
        Ok(())
    }

    /// Refuses draft edits once the flow is terminal
    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.stage.is_terminal() {
            return Err(WizardError::AlreadyCompleted);
        }
        Ok(())
    }

    /// The one phone prefill attempt
    ///
    /// Fetches the stored profile and seeds the dial code and number from
    /// its phone. A number without a supported dial code keeps the default
    /// code and salvages the digits. Any failure is logged and ignored;
    /// the form works fine empty.
    async fn prefill_phone(&mut self) {
        if self.prefill_attempted || self.draft.has_phone() {
            return;
        }
        self.prefill_attempted = true;

        let profile = match self.profile.me().await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("Phone prefill skipped: {}", err);
                return;
            }
        };

        let phone = match profile.phone_number {
            Some(p) if !p.is_empty() => p,
            _ => return,
        };

        match CountryCode::split_prefix(&phone) {
            Some((code, national)) => {
                self.draft.country_code = code;
                self.draft.phone = national.to_string();
            }
            None => {
                self.draft.country_code = CountryCode::default();
                self.draft.phone = digits_only(&phone);
            }
        }
        debug!("Prefilled phone {}", mask_phone(&self.draft.phone_number()));
    }
}
