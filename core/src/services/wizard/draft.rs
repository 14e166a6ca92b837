//! Draft data collected across the wizard steps.

use jb_shared::utils::phone::CountryCode;
use jb_shared::utils::validation::not_blank;

use crate::domain::value_objects::FileUpload;

/// In-memory draft of one application attempt
///
/// Never persisted; dropped with the wizard.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    /// Applicant full name
    pub full_name: String,

    /// Selected dial code
    pub country_code: CountryCode,

    /// National phone number as typed
    pub phone: String,

    /// Resume file, required to pass the resume step
    pub resume: Option<FileUpload>,

    /// Cover letter file, optional
    pub cover_letter: Option<FileUpload>,
}

impl ApplicationDraft {
    /// The full phone number as it is submitted (dial code + national)
    pub fn phone_number(&self) -> String {
        self.country_code.compose(&self.phone)
    }

    /// Whether the phone field has content
    pub fn has_phone(&self) -> bool {
        not_blank(&self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_blank() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.country_code, CountryCode::Germany);
        assert!(!draft.has_phone());
        assert!(draft.resume.is_none());
        assert!(draft.cover_letter.is_none());
    }

    #[test]
    fn test_phone_number_composition() {
        let draft = ApplicationDraft {
            country_code: CountryCode::France,
            phone: "612345678".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.phone_number(), "+33612345678");
    }

    #[test]
    fn test_blank_phone_does_not_count() {
        let draft = ApplicationDraft {
            phone: "   ".to_string(),
            ..Default::default()
        };
        assert!(!draft.has_phone());
    }
}
