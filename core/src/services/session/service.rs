//! Main session service implementation

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::session::SessionClaims;
use crate::domain::entities::user::Role;
use crate::domain::value_objects::StoredSession;
use crate::errors::{DomainResult, SessionError};
use crate::gateways::{AuthGateway, SessionStore};

/// What the stored credential resolves to for the current render
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No usable credential: absent, unreadable, or expired
    Anonymous,

    /// A decodable, unexpired credential
    Authenticated { claims: SessionClaims },
}

impl SessionState {
    /// Whether a signed-in identity is available
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

/// Session service managing the persisted credential and the identity
/// derived from it
///
/// The service shares its [`SessionStore`] with the HTTP layer: the store
/// is the one authoritative slot, written here on sign-in and sign-out and
/// cleared by the HTTP layer when the server answers 401.
pub struct SessionService<S, A>
where
    S: SessionStore,
    A: AuthGateway,
{
    /// Store holding the persisted snapshot
    store: Arc<S>,
    /// Gateway for the auth endpoints
    auth: Arc<A>,
}

impl<S, A> SessionService<S, A>
where
    S: SessionStore,
    A: AuthGateway,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `store` - Session store shared with the HTTP layer
    /// * `auth` - Gateway for the auth endpoints
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self { store, auth }
    }

    /// Sign in with email and password
    ///
    /// This method:
    /// 1. Exchanges the credentials for a bearer token
    /// 2. Decodes the issued token payload
    /// 3. Persists the session snapshot
    ///
    /// # Arguments
    ///
    /// * `email` - Account email
    /// * `password` - Account password
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded identity of the new session
    /// * `Err(DomainError)` - If the API rejects the credentials, the
    ///   issued token cannot be read, or the snapshot cannot be written
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<SessionClaims> {
        // Step 1: Exchange the credentials for a token
        let response = self.auth.login(email, password).await?;

        // Step 2: Decode the issued token; one we cannot read is useless
        let claims =
            SessionClaims::decode(&response.token).ok_or(SessionError::MalformedToken)?;

        // Step 3: Persist the snapshot
        self.persist(&response.token, &claims, response.user_id)?;

        info!(
            "Session established (role {})",
            claims.role.as_deref().unwrap_or("none")
        );
        Ok(claims)
    }

    /// Create a new candidate account and sign it in
    ///
    /// The API issues a token straight from registration, so a successful
    /// register behaves exactly like a login.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<SessionClaims> {
        // Step 1: Create the account; the response carries a fresh token
        let response = self.auth.register(name, email, password).await?;

        // Step 2: Decode and persist, same as a password login
        let claims =
            SessionClaims::decode(&response.token).ok_or(SessionError::MalformedToken)?;
        self.persist(&response.token, &claims, response.user_id)?;

        info!("Account registered and session established");
        Ok(claims)
    }

    /// Capture the token handed over by the OAuth redirect
    ///
    /// The OAuth flow ends with the provider redirecting back carrying a
    /// ready-made bearer token; no further API call is needed.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token from the redirect URL
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded identity of the new session
    /// * `Err(DomainError)` - If the token cannot be read or stored
    pub fn complete_oauth_callback(&self, token: &str) -> DomainResult<SessionClaims> {
        // Step 1: Reject a token we cannot read
        let claims = SessionClaims::decode(token).ok_or(SessionError::MalformedToken)?;

        // Step 2: Persist it exactly like a password login
        self.persist(token, &claims, None)?;

        info!(
            "Session established from OAuth callback (role {})",
            claims.role.as_deref().unwrap_or("none")
        );
        Ok(claims)
    }

    /// Sign out, dropping the persisted snapshot
    pub fn logout(&self) -> DomainResult<()> {
        self.store.clear().map_err(|e| {
            warn!("Failed to clear session: {}", e);
            e
        })?;
        info!("Session cleared");
        Ok(())
    }

    /// Ask the server to mail a password reset link
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<String> {
        debug!("Requesting password reset");
        self.auth.request_password_reset(email).await
    }

    /// Redeem a reset token for a new password
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<String> {
        debug!("Resetting password");
        self.auth.reset_password(token, new_password).await
    }

    /// The raw bearer token, for request authorization
    pub fn bearer_token(&self) -> Option<String> {
        self.snapshot().map(|s| s.token)
    }

    /// The stored account id
    ///
    /// Prefers the id the auth response reported over the token claim.
    pub fn user_id(&self) -> Option<i64> {
        self.snapshot().and_then(|s| s.user_id)
    }

    /// The decoded claims of the stored token
    ///
    /// `None` when no token is stored or its payload cannot be read. No
    /// expiry check happens here; see [`SessionService::state`].
    pub fn decode(&self) -> Option<SessionClaims> {
        self.snapshot()
            .and_then(|s| SessionClaims::decode(&s.token))
    }

    /// Whether the stored credential is expired
    ///
    /// An absent or unreadable token counts as expired.
    pub fn is_expired(&self) -> bool {
        match self.decode() {
            Some(claims) => claims.is_expired(),
            None => true,
        }
    }

    /// The signed-in account's role, when it is one this client knows
    ///
    /// `None` when signed out, when the credential is expired or
    /// unreadable, and when the role string is not a known one. Follows
    /// [`SessionService::state`], so an expired session reads the same
    /// as no session.
    pub fn role(&self) -> Option<Role> {
        match self.state() {
            SessionState::Authenticated { claims } => claims.known_role(),
            SessionState::Anonymous => None,
        }
    }

    /// Resolve the session for the current render
    ///
    /// # Returns
    ///
    /// `SessionState::Authenticated` only for a decodable, unexpired
    /// token; anything else is `SessionState::Anonymous`
    pub fn state(&self) -> SessionState {
        match self.decode() {
            Some(claims) if !claims.is_expired() => SessionState::Authenticated { claims },
            _ => SessionState::Anonymous,
        }
    }

    /// Writes the snapshot for a freshly issued token
    ///
    /// The auth response's account id wins over the claim when both exist.
    fn persist(
        &self,
        token: &str,
        claims: &SessionClaims,
        user_id: Option<i64>,
    ) -> Result<(), SessionError> {
        let mut snapshot = StoredSession::from_claims(token, claims);
        if user_id.is_some() {
            snapshot.user_id = user_id;
        }
        self.store.save(&snapshot)
    }

    /// Loads the snapshot, treating a failed read as signed out
    fn snapshot(&self) -> Option<StoredSession> {
        match self.store.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Session store read failed: {}", err);
                None
            }
        }
    }
}
