//! Business services containing domain logic and use cases.

pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use session::{SessionService, SessionState};
pub use wizard::{ApplicationDraft, ApplicationWizard, WizardStage};
