//! Session claims decoded from the JobDesk bearer token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::Role;

/// Claims carried in the bearer token payload
///
/// The token is an opaque three-part dotted credential. Its middle part is a
/// base64url JSON document that the client reads purely to render identity
/// (who is signed in, which role, until when). The signature is never
/// checked here: every claim is re-validated server-side on each request, so
/// a forged payload buys nothing beyond a different screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (the account email)
    pub sub: Option<String>,

    /// Explicit email claim, present on some OAuth-issued tokens
    pub email: Option<String>,

    /// Role string as issued (CANDIDATE, RECRUITER, ...)
    pub role: Option<String>,

    /// Numeric account id
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,

    /// Display name
    pub name: Option<String>,

    /// Phone number, when the account has one on file
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,

    /// Expiration timestamp (seconds since epoch)
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// Decodes the payload section of a bearer token
    ///
    /// Accepts any syntactically well-formed token and ignores unknown
    /// claims. A token that does not split into three parts, whose payload
    /// is not base64url, or whose payload is not a JSON object yields
    /// `None`; callers treat that exactly like an absent token.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw bearer token string
    ///
    /// # Returns
    ///
    /// `Some(SessionClaims)` when the payload parses, `None` otherwise
    pub fn decode(token: &str) -> Option<Self> {
        let mut parts = token.split('.');
        let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        // Issuers differ on padding; strip it before decoding
        let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&raw).ok()
    }

    /// Checks whether the session has expired
    ///
    /// A missing `exp` claim counts as expired, so a token the issuer never
    /// stamped cannot keep a session alive.
    ///
    /// # Returns
    ///
    /// `true` if `exp` is absent or in the past, `false` otherwise
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => true,
        }
    }

    /// Gets the account email
    ///
    /// The issuer puts the email in `sub`; OAuth-issued tokens may carry an
    /// explicit `email` claim instead.
    pub fn account_email(&self) -> Option<&str> {
        self.sub.as_deref().or(self.email.as_deref())
    }

    /// Gets the role as a known enum value
    ///
    /// # Returns
    ///
    /// `None` when the claim is absent or names a role this client does not
    /// know; the raw string remains available in [`SessionClaims::role`]
    pub fn known_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a structurally valid token around the given payload JSON
    fn token_with_payload(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{}.{}.signature", header, payload)
    }

    fn far_future() -> i64 {
        Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_decode_full_payload() {
        let token = token_with_payload(&format!(
            r#"{{"sub":"jane@example.com","role":"CANDIDATE","userId":7,
                "name":"Jane Doe","phoneNumber":"+4915123456789","exp":{}}}"#,
            far_future()
        ));

        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("jane@example.com"));
        assert_eq!(claims.role.as_deref(), Some("CANDIDATE"));
        assert_eq!(claims.user_id, Some(7));
        assert_eq!(claims.name.as_deref(), Some("Jane Doe"));
        assert_eq!(claims.phone_number.as_deref(), Some("+4915123456789"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_decode_ignores_unknown_claims() {
        let token = token_with_payload(
            r#"{"sub":"a@b.co","iss":"jobdesk","aud":"web","custom":{"x":1},"exp":99}"#,
        );
        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@b.co"));
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert_eq!(SessionClaims::decode(""), None);
        assert_eq!(SessionClaims::decode("only-one-part"), None);
        assert_eq!(SessionClaims::decode("two.parts"), None);
        assert_eq!(SessionClaims::decode("a.b.c.d"), None);
        assert_eq!(SessionClaims::decode("head.%%not-base64%%.sig"), None);

        // Valid base64 but not JSON
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert_eq!(SessionClaims::decode(&not_json), None);
    }

    #[test]
    fn test_decode_accepts_padded_payload() {
        use base64::engine::general_purpose::URL_SAFE;

        let payload = URL_SAFE.encode(br#"{"sub":"p@d.ed","exp":1}"#);
        let token = format!("h.{}.s", payload);
        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("p@d.ed"));
    }

    #[test]
    fn test_expiry_boundary() {
        let mut claims = SessionClaims::decode(&token_with_payload(r#"{"exp":0}"#)).unwrap();
        assert!(claims.is_expired());

        claims.exp = Some(far_future());
        assert!(!claims.is_expired());

        // The boundary instant itself counts as expired
        claims.exp = Some(Utc::now().timestamp());
        assert!(claims.is_expired());
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let claims = SessionClaims::decode(&token_with_payload(r#"{"sub":"x@y.z"}"#)).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn test_account_email_prefers_sub() {
        let both = SessionClaims::decode(&token_with_payload(
            r#"{"sub":"sub@example.com","email":"email@example.com","exp":1}"#,
        ))
        .unwrap();
        assert_eq!(both.account_email(), Some("sub@example.com"));

        let email_only =
            SessionClaims::decode(&token_with_payload(r#"{"email":"email@example.com","exp":1}"#))
                .unwrap();
        assert_eq!(email_only.account_email(), Some("email@example.com"));

        let neither = SessionClaims::decode(&token_with_payload(r#"{"exp":1}"#)).unwrap();
        assert_eq!(neither.account_email(), None);
    }

    #[test]
    fn test_known_role_parsing() {
        let recruiter =
            SessionClaims::decode(&token_with_payload(r#"{"role":"RECRUITER","exp":1}"#)).unwrap();
        assert_eq!(recruiter.known_role(), Some(Role::Recruiter));

        // Unknown role strings decode fine but map to no known role
        let moderator =
            SessionClaims::decode(&token_with_payload(r#"{"role":"MODERATOR","exp":1}"#)).unwrap();
        assert_eq!(moderator.known_role(), None);
        assert_eq!(moderator.role.as_deref(), Some("MODERATOR"));

        let missing = SessionClaims::decode(&token_with_payload(r#"{"exp":1}"#)).unwrap();
        assert_eq!(missing.known_role(), None);
    }
}
