//! Unit tests for the one-shot phone prefill

use std::sync::Arc;

use jb_shared::utils::phone::CountryCode;

use crate::services::wizard::{ApplicationWizard, WizardStage};

use super::mocks::*;

async fn wizard_with_profile(
    profile: MockProfileGateway,
) -> (Arc<std::sync::Mutex<u32>>, ApplicationWizard<MockProfileGateway, MockApplicationsGateway>) {
    let me_calls = profile.me_calls.clone();
    let jobs = MockJobsGateway::with_job(sample_job(7));
    let wizard = ApplicationWizard::start(
        &jobs,
        Arc::new(profile),
        Arc::new(MockApplicationsGateway::accepting()),
        live_claims(),
        7,
    )
    .await
    .unwrap();
    (me_calls, wizard)
}

#[tokio::test]
async fn test_prefill_splits_supported_dial_code() {
    let profile = MockProfileGateway::returning(sample_profile(Some("+4915123456789")));
    let (me_calls, wizard) = wizard_with_profile(profile).await;

    assert_eq!(wizard.draft().country_code, CountryCode::Germany);
    assert_eq!(wizard.draft().phone, "15123456789");
    assert!(wizard.prefill_attempted());
    assert_eq!(*me_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_prefill_recognizes_every_supported_code() {
    let cases = [
        ("+212612345678", CountryCode::Morocco, "612345678"),
        ("+33612345678", CountryCode::France, "612345678"),
        ("+14155552671", CountryCode::NorthAmerica, "4155552671"),
    ];

    for (stored, expected_code, expected_national) in cases {
        let profile = MockProfileGateway::returning(sample_profile(Some(stored)));
        let (_, wizard) = wizard_with_profile(profile).await;

        assert_eq!(wizard.draft().country_code, expected_code, "for {}", stored);
        assert_eq!(wizard.draft().phone, expected_national, "for {}", stored);
    }
}

#[tokio::test]
async fn test_prefill_unsupported_code_salvages_digits() {
    // +7 is not on the form; the default code stays and digits survive
    let profile = MockProfileGateway::returning(sample_profile(Some("+7 912 345-67-89")));
    let (_, wizard) = wizard_with_profile(profile).await;

    assert_eq!(wizard.draft().country_code, CountryCode::Germany);
    assert_eq!(wizard.draft().phone, "79123456789");
}

#[tokio::test]
async fn test_prefill_failure_leaves_field_empty() {
    let (me_calls, wizard) = wizard_with_profile(MockProfileGateway::failing()).await;

    // The wizard started fine regardless
    assert_eq!(wizard.stage(), WizardStage::ContactInfo);
    assert_eq!(wizard.draft().phone, "");
    // The attempt is still spent
    assert!(wizard.prefill_attempted());
    assert_eq!(*me_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_prefill_skips_profile_without_phone() {
    let profile = MockProfileGateway::returning(sample_profile(None));
    let (me_calls, wizard) = wizard_with_profile(profile).await;

    assert_eq!(wizard.draft().phone, "");
    assert!(wizard.prefill_attempted());
    assert_eq!(*me_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_prefill_treats_empty_phone_as_absent() {
    let profile = MockProfileGateway::returning(sample_profile(Some("")));
    let (_, wizard) = wizard_with_profile(profile).await;

    assert_eq!(wizard.draft().phone, "");
    assert_eq!(wizard.draft().country_code, CountryCode::default());
}

#[tokio::test]
async fn test_prefill_runs_exactly_once() {
    let profile = MockProfileGateway::returning(sample_profile(Some("+4915123456789")));
    let (me_calls, mut wizard) = wizard_with_profile(profile).await;

    // Moving around the flow never re-fetches the profile
    wizard.set_full_name("Jane Doe").unwrap();
    wizard.advance().unwrap();
    wizard.back().unwrap();
    wizard.advance().unwrap();

    assert_eq!(*me_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_prefill_never_overwrites_user_input() {
    // The user cleared the field and typed their own number; going back
    // and forth must not resurrect the profile value
    let profile = MockProfileGateway::returning(sample_profile(Some("+4915123456789")));
    let (_, mut wizard) = wizard_with_profile(profile).await;

    wizard.set_country_code(CountryCode::France).unwrap();
    wizard.set_phone("698765432").unwrap();
    wizard.advance().unwrap();
    wizard.back().unwrap();

    assert_eq!(wizard.draft().country_code, CountryCode::France);
    assert_eq!(wizard.draft().phone, "698765432");
    assert_eq!(wizard.draft().phone_number(), "+33698765432");
}
