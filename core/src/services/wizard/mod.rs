//! Application wizard module
//!
//! The five-step job application flow:
//! 1. Contact info (name, phone with dial code)
//! 2. Resume upload
//! 3. Optional cover letter
//! 4. Review and submit
//! 5. Completed (terminal, holds the outcome)
//!
//! The wizard owns its draft, validates every forward transition, prefills
//! the phone field from the stored profile once, and performs exactly one
//! submission.

mod draft;
mod service;
mod state;

#[cfg(test)]
mod tests;

pub use draft::ApplicationDraft;
pub use service::ApplicationWizard;
pub use state::WizardStage;
