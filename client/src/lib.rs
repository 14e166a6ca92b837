//! # JobDesk Client Layer
//!
//! This crate implements the outer layer of the JobDesk client. It provides
//! the concrete implementations behind the `jb_core` gateway traits: a
//! reqwest-based API client for the remote REST endpoints and a file-backed
//! store for the persisted session.
//!
//! ## Architecture
//!
//! The client layer contains:
//! - **HTTP**: One [`ApiClient`] implementing every gateway trait against
//!   the JobDesk REST API
//! - **Storage**: [`FileSessionStore`], the session snapshot as a JSON file
//! - **Container**: [`JobDeskClient`], which wires both into the core
//!   services
//!
//! Most programs only need [`JobDeskClient::from_env`] and the services it
//! exposes.

pub mod http;
pub mod storage;

pub use http::ApiClient;
pub use storage::FileSessionStore;

use std::sync::Arc;

use jb_core::errors::{DomainResult, SessionError};
use jb_core::gateways::ApplicationsGateway;
use jb_core::services::session::{SessionService, SessionState};
use jb_core::services::wizard::ApplicationWizard;
use jb_shared::config::ClientConfig;

/// Session service wired to the file store and the HTTP auth endpoints
pub type ClientSessionService = SessionService<FileSessionStore, ApiClient<FileSessionStore>>;

/// Application wizard wired to the HTTP profile and application endpoints
pub type ClientWizard = ApplicationWizard<ApiClient<FileSessionStore>, ApiClient<FileSessionStore>>;

/// Client service container
///
/// Owns the one [`ApiClient`] and the one [`FileSessionStore`] the whole
/// program shares, so that a sign-in through [`JobDeskClient::session`] is
/// immediately visible to every request the API client sends.
pub struct JobDeskClient {
    api: Arc<ApiClient<FileSessionStore>>,
    session: ClientSessionService,
}

impl JobDeskClient {
    /// Wire up the client services from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let store = Arc::new(FileSessionStore::new(config.storage.session_path));
        let api = Arc::new(ApiClient::new(config.api, store.clone())?);
        let session = SessionService::new(store, api.clone());

        Ok(Self { api, session })
    }

    /// Wire up the client services from environment variables
    ///
    /// Reads the `.env` file for the detected environment first; see
    /// [`ClientConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::from_env())
    }

    /// The shared API client
    ///
    /// Implements every gateway trait, so it can be handed directly to
    /// code written against `jb_core`.
    pub fn api(&self) -> &Arc<ApiClient<FileSessionStore>> {
        &self.api
    }

    /// The session service
    pub fn session(&self) -> &ClientSessionService {
        &self.session
    }

    /// Begin the application wizard for a job
    ///
    /// # Arguments
    ///
    /// * `job_id` - Id of the job to apply to
    ///
    /// # Returns
    ///
    /// * `Ok(ClientWizard)` - A wizard on its first step
    /// * `Err(DomainError)` - If nobody is signed in, the session has
    ///   expired, or the job cannot be fetched
    pub async fn start_application(&self, job_id: i64) -> DomainResult<ClientWizard> {
        let claims = match self.session.state() {
            SessionState::Authenticated { claims } => claims,
            SessionState::Anonymous => return Err(SessionError::NotAuthenticated.into()),
        };

        ApplicationWizard::start(
            self.api.as_ref(),
            self.api.clone(),
            self.api.clone(),
            claims,
            job_id,
        )
        .await
    }

    /// Whether the signed-in account has already applied to a job
    ///
    /// Without a stored account id there is nothing to ask the server, so
    /// an anonymous session simply reports `false`.
    pub async fn has_applied(&self, job_id: i64) -> DomainResult<bool> {
        match self.session.user_id() {
            Some(user_id) => self.api.has_applied(user_id, job_id).await,
            None => Ok(false),
        }
    }
}
