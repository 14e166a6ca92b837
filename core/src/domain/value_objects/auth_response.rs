//! Authentication response value object for the auth endpoints.

use serde::{Deserialize, Serialize};

/// Response of the login and register endpoints
///
/// The API answers both with a freshly issued bearer token plus the numeric
/// account id. Everything else the client shows about the signed-in user is
/// decoded from the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,

    /// Numeric account id
    pub user_id: Option<i64>,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(token: impl Into<String>, user_id: Option<i64>) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }
}
