//! Persisted session snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::entities::session::SessionClaims;

/// The session snapshot the client persists between runs
///
/// Holds the bearer token plus the identity fields derived from it at
/// sign-in time. The derived fields are a rendering convenience; the token
/// remains the single source of truth and is re-decoded whenever identity
/// is resolved. Written only on login or OAuth callback, cleared wholesale
/// on logout or when the API rejects the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Raw bearer token
    pub token: String,

    /// Role string as issued
    pub role: Option<String>,

    /// Numeric account id
    pub user_id: Option<i64>,

    /// Display name
    pub name: Option<String>,

    /// Account email
    pub email: Option<String>,
}

impl StoredSession {
    /// Builds a snapshot from a token and the claims decoded from it
    pub fn from_claims(token: impl Into<String>, claims: &SessionClaims) -> Self {
        Self {
            token: token.into(),
            role: claims.role.clone(),
            user_id: claims.user_id,
            name: claims.name.clone(),
            email: claims.account_email().map(str::to_string),
        }
    }
}
