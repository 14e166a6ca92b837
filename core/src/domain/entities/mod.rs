//! Domain entities representing core business objects.

pub mod application;
pub mod job;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use application::{Application, ApplicationStatus, MyApplication};
pub use job::{Category, Company, Job, JobDraft, JobFilters, JobStats, JobType};
pub use session::SessionClaims;
pub use user::{AuthProvider, Profile, Role};
