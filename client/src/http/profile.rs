//! Current-user endpoint implementations.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use jb_core::domain::entities::user::Profile;
use jb_core::errors::DomainResult;
use jb_core::gateways::{ProfileGateway, SessionStore};

use super::client::ApiClient;

#[derive(Serialize)]
struct NameUpdate<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneUpdate<'a> {
    phone_number: &'a str,
}

#[derive(Serialize)]
struct AddressUpdate<'a> {
    address: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSet<'a> {
    new_password: &'a str,
}

#[async_trait]
impl<S: SessionStore> ProfileGateway for ApiClient<S> {
    async fn me(&self) -> DomainResult<Profile> {
        debug!("GET /users/me");
        self.fetch_json(self.request(Method::GET, "users/me")).await
    }

    async fn update_name(&self, name: &str) -> DomainResult<Profile> {
        debug!("PATCH /users/me/name");
        let request = self
            .request(Method::PATCH, "users/me/name")
            .json(&NameUpdate { name });
        self.fetch_json(request).await
    }

    async fn update_phone(&self, phone_number: &str) -> DomainResult<Profile> {
        debug!("PATCH /users/me/phone");
        let request = self
            .request(Method::PATCH, "users/me/phone")
            .json(&PhoneUpdate { phone_number });
        self.fetch_json(request).await
    }

    async fn update_address(&self, address: &str) -> DomainResult<Profile> {
        debug!("PATCH /users/me/address");
        let request = self
            .request(Method::PATCH, "users/me/address")
            .json(&AddressUpdate { address });
        self.fetch_json(request).await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<String> {
        debug!("PATCH /users/me/password");
        let request = self
            .request(Method::PATCH, "users/me/password")
            .json(&PasswordChange {
                old_password,
                new_password,
            });
        self.fetch_text(request).await
    }

    // OAuth accounts have no password yet, so the server offers a separate
    // endpoint that skips the old-password check

    async fn set_password(&self, new_password: &str) -> DomainResult<String> {
        debug!("PATCH /users/me/set-password");
        let request = self
            .request(Method::PATCH, "users/me/set-password")
            .json(&PasswordSet { new_password });
        self.fetch_text(request).await
    }
}
