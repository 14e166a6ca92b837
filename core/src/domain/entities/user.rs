//! User profile entity and account enums.

use serde::{Deserialize, Serialize};

/// Account role as issued by the JobDesk API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A job seeker who browses and applies
    Candidate,
    /// An employer-side account that posts jobs and reviews applicants
    Recruiter,
    /// Back-office account
    Admin,
}

impl Role {
    /// Get the wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "CANDIDATE",
            Role::Recruiter => "RECRUITER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CANDIDATE" => Ok(Role::Candidate),
            "RECRUITER" => Ok(Role::Recruiter),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// How the account authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    /// Email and password held by JobDesk
    Local,
    /// Google OAuth account
    Google,
}

/// User profile as returned by `/users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier for the account
    pub id: i64,

    /// Display name
    pub name: String,

    /// Account email
    pub email: String,

    /// Phone number, when one is on file
    pub phone_number: Option<String>,

    /// Postal address, when one is on file
    pub address: Option<String>,

    /// Account role
    pub role: Role,

    /// Company the recruiter belongs to
    pub company_id: Option<i64>,

    /// Company display name
    pub company_name: Option<String>,

    /// Authentication provider for the account
    pub provider: Option<AuthProvider>,
}

impl Profile {
    /// Checks if the profile belongs to a candidate
    pub fn is_candidate(&self) -> bool {
        self.role == Role::Candidate
    }

    /// Checks if the profile belongs to a recruiter
    pub fn is_recruiter(&self) -> bool {
        self.role == Role::Recruiter
    }

    /// Checks if the account signed up through an OAuth provider
    ///
    /// OAuth accounts have no local password until they set one, which is
    /// why the password screens branch on this.
    pub fn is_oauth_account(&self) -> bool {
        matches!(self.provider, Some(AuthProvider::Google))
    }
}
