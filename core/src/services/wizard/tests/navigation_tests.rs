//! Unit tests for wizard stage navigation and step guards

use std::sync::Arc;

use crate::domain::entities::job::JobType;
use crate::errors::{DomainError, SessionError, ValidationError, WizardError};
use crate::services::wizard::{ApplicationWizard, WizardStage};

use super::mocks::*;

async fn started_wizard() -> ApplicationWizard<MockProfileGateway, MockApplicationsGateway> {
    let jobs = MockJobsGateway::with_job(sample_job(7));
    ApplicationWizard::start(
        &jobs,
        Arc::new(MockProfileGateway::returning(sample_profile(None))),
        Arc::new(MockApplicationsGateway::accepting()),
        live_claims(),
        7,
    )
    .await
    .unwrap()
}

/// Fills the draft and walks the wizard onto the review step
fn walk_to_review(wizard: &mut ApplicationWizard<MockProfileGateway, MockApplicationsGateway>) {
    wizard.set_full_name("Jane Doe").unwrap();
    wizard.set_phone("15123456789").unwrap();
    wizard.attach_resume(pdf("cv.pdf")).unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.stage(), WizardStage::Review);
}

#[tokio::test]
async fn test_start_lands_on_contact_info() {
    let wizard = started_wizard().await;

    assert_eq!(wizard.stage(), WizardStage::ContactInfo);
    assert!(!wizard.is_completed());
    assert_eq!(wizard.job().id, 7);
    assert_eq!(wizard.job().title, "Backend Engineer");
    assert_eq!(wizard.job().job_type, JobType::FullTime);
    // Name arrives pre-seeded from the session claims
    assert_eq!(wizard.draft().full_name, "Jane Doe");
}

#[tokio::test]
async fn test_start_rejects_expired_session() {
    let jobs = MockJobsGateway::with_job(sample_job(7));
    let result = ApplicationWizard::start(
        &jobs,
        Arc::new(MockProfileGateway::returning(sample_profile(None))),
        Arc::new(MockApplicationsGateway::accepting()),
        expired_claims(),
        7,
    )
    .await;

    match result.err().unwrap() {
        DomainError::Session(SessionError::Expired) => {}
        other => panic!("Expected an expired session error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_start_surfaces_missing_job() {
    let jobs = MockJobsGateway::not_found();
    let result = ApplicationWizard::start(
        &jobs,
        Arc::new(MockProfileGateway::returning(sample_profile(None))),
        Arc::new(MockApplicationsGateway::accepting()),
        live_claims(),
        404,
    )
    .await;

    match result.err().unwrap() {
        DomainError::NotFound { .. } => {}
        other => panic!("Expected a not-found error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_contact_info_requires_name() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("").unwrap();
    wizard.set_phone("15123456789").unwrap();

    match wizard.advance().err().unwrap() {
        WizardError::Validation(ValidationError::RequiredField { field, message }) => {
            assert_eq!(field, "name");
            assert_eq!(message, "Name is required.");
        }
        other => panic!("Expected a required-field error, got {:?}", other),
    }
    // A refused transition leaves the stage alone
    assert_eq!(wizard.stage(), WizardStage::ContactInfo);
}

#[tokio::test]
async fn test_whitespace_name_counts_as_missing() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("   ").unwrap();
    wizard.set_phone("15123456789").unwrap();

    assert!(wizard.advance().is_err());
}

#[tokio::test]
async fn test_contact_info_requires_phone() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("Jane Doe").unwrap();

    match wizard.advance().err().unwrap() {
        WizardError::Validation(ValidationError::RequiredField { field, message }) => {
            assert_eq!(field, "phone");
            assert_eq!(message, "Phone number is required.");
        }
        other => panic!("Expected a required-field error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_name_is_checked_before_phone() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("").unwrap();

    match wizard.advance().err().unwrap() {
        WizardError::Validation(ValidationError::RequiredField { field, .. }) => {
            assert_eq!(field, "name");
        }
        other => panic!("Expected a required-field error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resume_step_requires_file() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("Jane Doe").unwrap();
    wizard.set_phone("15123456789").unwrap();
    assert_eq!(wizard.advance().unwrap(), WizardStage::Resume);

    match wizard.advance().err().unwrap() {
        WizardError::Validation(ValidationError::RequiredField { field, message }) => {
            assert_eq!(field, "resume");
            assert_eq!(message, "Please upload your CV.");
        }
        other => panic!("Expected a required-field error, got {:?}", other),
    }
    assert_eq!(wizard.stage(), WizardStage::Resume);

    wizard.attach_resume(pdf("cv.pdf")).unwrap();
    assert_eq!(wizard.advance().unwrap(), WizardStage::CoverLetter);
}

#[tokio::test]
async fn test_cover_letter_step_never_blocks() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("Jane Doe").unwrap();
    wizard.set_phone("15123456789").unwrap();
    wizard.attach_resume(pdf("cv.pdf")).unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    // No cover letter attached, the step passes anyway
    assert_eq!(wizard.stage(), WizardStage::CoverLetter);
    assert!(wizard.draft().cover_letter.is_none());
    assert_eq!(wizard.advance().unwrap(), WizardStage::Review);
}

#[tokio::test]
async fn test_back_preserves_the_draft() {
    let mut wizard = started_wizard().await;
    wizard.set_full_name("Jane Doe").unwrap();
    wizard.set_phone("15123456789").unwrap();
    wizard.advance().unwrap();
    wizard.attach_resume(pdf("cv.pdf")).unwrap();

    assert_eq!(wizard.back().unwrap(), WizardStage::ContactInfo);
    assert_eq!(wizard.draft().full_name, "Jane Doe");
    assert_eq!(wizard.draft().phone, "15123456789");
    assert!(wizard.draft().resume.is_some());
}

#[tokio::test]
async fn test_cannot_go_back_from_first_step() {
    let mut wizard = started_wizard().await;

    match wizard.back().err().unwrap() {
        WizardError::NoPreviousStage { stage } => assert_eq!(stage, "contact info"),
        other => panic!("Expected no-previous-stage, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cannot_advance_past_review() {
    let mut wizard = started_wizard().await;
    walk_to_review(&mut wizard);

    match wizard.advance().err().unwrap() {
        WizardError::NoNextStage { stage } => assert_eq!(stage, "review"),
        other => panic!("Expected no-next-stage, got {:?}", other),
    }
    assert_eq!(wizard.stage(), WizardStage::Review);
}

#[tokio::test]
async fn test_review_can_still_go_back() {
    let mut wizard = started_wizard().await;
    walk_to_review(&mut wizard);

    assert_eq!(wizard.back().unwrap(), WizardStage::CoverLetter);
    assert_eq!(wizard.back().unwrap(), WizardStage::Resume);
    // Forward again with everything still in place
    assert_eq!(wizard.advance().unwrap(), WizardStage::CoverLetter);
    assert_eq!(wizard.advance().unwrap(), WizardStage::Review);
}
