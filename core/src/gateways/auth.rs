//! Authentication gateway trait for the auth endpoints.

use async_trait::async_trait;

use crate::domain::value_objects::AuthResponse;
use crate::errors::DomainResult;

/// Gateway for the authentication endpoints
///
/// Implementations talk to `/auth/*` on the remote API. The trait returns
/// the raw issued credential; deciding what to persist from it is the
/// session service's business.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use jb_core::gateways::AuthGateway;
/// use jb_core::domain::value_objects::AuthResponse;
/// use jb_core::errors::DomainResult;
///
/// struct HttpAuthGateway {
///     // http client and base url
/// }
///
/// #[async_trait]
/// impl AuthGateway for HttpAuthGateway {
///     async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
///         // POST /auth/login
///         # unimplemented!()
///     }
///
///     async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<AuthResponse> {
///         # unimplemented!()
///     }
///
///     async fn request_password_reset(&self, email: &str) -> DomainResult<String> {
///         # unimplemented!()
///     }
///
///     async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<String> {
///         # unimplemented!()
///     }
/// }
/// ```
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse>;

    /// Create a candidate account and sign it in
    ///
    /// New accounts are always candidates; recruiter accounts are
    /// provisioned server-side.
    async fn register(&self, name: &str, email: &str, password: &str)
        -> DomainResult<AuthResponse>;

    /// Ask the server to mail a password reset link
    ///
    /// Returns the server's confirmation message.
    async fn request_password_reset(&self, email: &str) -> DomainResult<String>;

    /// Redeem a reset token for a new password
    ///
    /// Returns the server's confirmation message.
    async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<String>;
}
