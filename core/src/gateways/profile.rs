//! Profile gateway trait for the current-user endpoints.

use async_trait::async_trait;

use crate::domain::entities::user::Profile;
use crate::errors::DomainResult;

/// Gateway for the `/users/me` endpoints
///
/// All operations act on the signed-in account; the server derives the
/// account from the bearer token, never from a parameter.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetch the signed-in account's profile
    async fn me(&self) -> DomainResult<Profile>;

    /// Change the display name, returning the updated profile
    async fn update_name(&self, name: &str) -> DomainResult<Profile>;

    /// Change the phone number, returning the updated profile
    async fn update_phone(&self, phone_number: &str) -> DomainResult<Profile>;

    /// Change the postal address, returning the updated profile
    async fn update_address(&self, address: &str) -> DomainResult<Profile>;

    /// Change the password, verifying the old one first
    ///
    /// Returns the server's confirmation message.
    async fn change_password(&self, old_password: &str, new_password: &str)
        -> DomainResult<String>;

    /// Create a local password on an OAuth account that has none
    ///
    /// Returns the server's confirmation message.
    async fn set_password(&self, new_password: &str) -> DomainResult<String>;
}
