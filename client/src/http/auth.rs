//! Auth endpoint implementations.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use jb_core::domain::value_objects::AuthResponse;
use jb_core::errors::DomainResult;
use jb_core::gateways::{AuthGateway, SessionStore};

use super::client::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl<S: SessionStore> AuthGateway for ApiClient<S> {
    async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        debug!("POST /auth/login");
        let request = self
            .request(Method::POST, "auth/login")
            .json(&LoginRequest { email, password });
        self.fetch_json(request).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        debug!("POST /auth/register");
        let request = self
            .request(Method::POST, "auth/register")
            .json(&RegisterRequest {
                name,
                email,
                password,
            });
        self.fetch_json(request).await
    }

    // The password reset endpoints take query parameters, not JSON bodies

    async fn request_password_reset(&self, email: &str) -> DomainResult<String> {
        debug!("POST /auth/forgot-password");
        let request = self
            .request(Method::POST, "auth/forgot-password")
            .query(&[("email", email)]);
        self.fetch_text(request).await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<String> {
        debug!("POST /auth/reset-password");
        let request = self
            .request(Method::POST, "auth/reset-password")
            .query(&[("token", token), ("newPassword", new_password)]);
        self.fetch_text(request).await
    }
}
