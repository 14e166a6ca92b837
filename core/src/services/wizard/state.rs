//! Wizard stage definitions.

/// Stages of the application flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    /// Name and phone number
    ContactInfo,
    /// Resume upload (required)
    Resume,
    /// Cover letter upload (optional)
    CoverLetter,
    /// Read-back of the draft before the one submission
    Review,
    /// Terminal; nothing leaves this stage
    Completed,
}

impl WizardStage {
    /// 1-based position for progress display
    pub fn step_number(&self) -> u8 {
        match self {
            WizardStage::ContactInfo => 1,
            WizardStage::Resume => 2,
            WizardStage::CoverLetter => 3,
            WizardStage::Review => 4,
            WizardStage::Completed => 5,
        }
    }

    /// The stage a successful `advance` lands on
    ///
    /// `Review` has no next stage: submission is its only exit.
    pub fn next(&self) -> Option<WizardStage> {
        match self {
            WizardStage::ContactInfo => Some(WizardStage::Resume),
            WizardStage::Resume => Some(WizardStage::CoverLetter),
            WizardStage::CoverLetter => Some(WizardStage::Review),
            WizardStage::Review => None,
            WizardStage::Completed => None,
        }
    }

    /// The stage `back` lands on
    pub fn previous(&self) -> Option<WizardStage> {
        match self {
            WizardStage::ContactInfo => None,
            WizardStage::Resume => Some(WizardStage::ContactInfo),
            WizardStage::CoverLetter => Some(WizardStage::Resume),
            WizardStage::Review => Some(WizardStage::CoverLetter),
            WizardStage::Completed => None,
        }
    }

    /// Whether this is the absorbing final stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStage::Completed)
    }
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WizardStage::ContactInfo => "contact info",
            WizardStage::Resume => "resume",
            WizardStage::CoverLetter => "cover letter",
            WizardStage::Review => "review",
            WizardStage::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert_eq!(WizardStage::ContactInfo.next(), Some(WizardStage::Resume));
        assert_eq!(WizardStage::Resume.next(), Some(WizardStage::CoverLetter));
        assert_eq!(WizardStage::CoverLetter.next(), Some(WizardStage::Review));
        assert_eq!(WizardStage::Review.next(), None);
        assert_eq!(WizardStage::Completed.next(), None);
    }

    #[test]
    fn test_backward_order_mirrors_forward() {
        for stage in [
            WizardStage::Resume,
            WizardStage::CoverLetter,
            WizardStage::Review,
        ] {
            let previous = stage.previous().unwrap();
            assert_eq!(previous.next(), Some(stage));
        }
        assert_eq!(WizardStage::ContactInfo.previous(), None);
        assert_eq!(WizardStage::Completed.previous(), None);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStage::ContactInfo.step_number(), 1);
        assert_eq!(WizardStage::Completed.step_number(), 5);
    }

    #[test]
    fn test_only_completed_is_terminal() {
        assert!(WizardStage::Completed.is_terminal());
        assert!(!WizardStage::Review.is_terminal());
    }
}
