//! Gateway interfaces between the domain and the outside world.
//!
//! Two kinds of ports live here: async gateways fronting the remote REST
//! API, and the synchronous session store fronting local persistence. The
//! client crate provides the production implementations; the service tests
//! run against hand-rolled mocks.

pub mod applications;
pub mod auth;
pub mod jobs;
pub mod profile;
pub mod session_store;

pub use applications::ApplicationsGateway;
pub use auth::AuthGateway;
pub use jobs::JobsGateway;
pub use profile::ProfileGateway;
pub use session_store::{MemorySessionStore, SessionStore};
