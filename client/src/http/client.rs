//! HTTP client for the JobDesk REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use jb_core::errors::{ApiError, DomainError, DomainResult};
use jb_core::gateways::SessionStore;
use jb_shared::config::ApiConfig;

/// Typed client for the JobDesk REST API
///
/// One reqwest client, one base URL. Every endpoint path is resolved
/// against the configured base, and the bearer token is read from the
/// shared session store on each outgoing request. The gateway trait
/// implementations in the sibling modules all route through the helpers
/// here, so the response policy (401 teardown, error body parsing) exists
/// exactly once.
pub struct ApiClient<S: SessionStore> {
    http: reqwest::Client,
    config: ApiConfig,
    store: Arc<S>,
}

impl<S: SessionStore> ApiClient<S> {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL and request timeout
    /// * `store` - Session store shared with the session service
    pub fn new(config: ApiConfig, store: Arc<S>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("API client ready for {}", config.base_url);
        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// The session store this client authorizes requests from
    pub fn store(&self) -> Arc<S> {
        self.store.clone()
    }

    /// The configuration the client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Builds a request for an endpoint path, with the bearer token
    /// attached when a session is stored
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match self.store.load() {
            Ok(Some(session)) => builder.bearer_auth(&session.token),
            Ok(None) => builder,
            Err(err) => {
                warn!("Session read failed, sending request unauthenticated: {}", err);
                builder
            }
        }
    }

    /// Sends a request and applies the response policy
    ///
    /// 401 tears the session down and maps to [`ApiError::AuthRejected`];
    /// any other non-success status becomes [`ApiError::Status`] carrying
    /// the server's message when the body has one.
    pub(crate) async fn send(&self, request: RequestBuilder) -> DomainResult<Response> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.reject_credential());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            }
            .into());
        }

        Ok(response)
    }

    /// Sends a request and deserializes the JSON response body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> DomainResult<T> {
        let response = self.send(request).await?;
        response.json().await.map_err(|err| {
            ApiError::Decode {
                message: err.to_string(),
            }
            .into()
        })
    }

    /// Sends a request and returns the plain text response body
    ///
    /// The confirmation endpoints (password reset, password change) answer
    /// with a bare message string rather than JSON.
    pub(crate) async fn fetch_text(&self, request: RequestBuilder) -> DomainResult<String> {
        let response = self.send(request).await?;
        response.text().await.map_err(transport)
    }

    /// Sends a request and discards the response body
    pub(crate) async fn fetch_empty(&self, request: RequestBuilder) -> DomainResult<()> {
        self.send(request).await?;
        Ok(())
    }

    /// Tears the stored session down after the API rejected the credential
    ///
    /// The anonymous state this produces is the same one logout produces,
    /// so callers re-render exactly as if the user had signed out.
    fn reject_credential(&self) -> DomainError {
        warn!("API rejected the credential, clearing session");
        if let Err(err) = self.store.clear() {
            warn!("Failed to clear session after 401: {}", err);
        }
        ApiError::AuthRejected.into()
    }
}

/// Maps a reqwest failure (connect, timeout, body read) to the domain error
pub(crate) fn transport(err: reqwest::Error) -> DomainError {
    ApiError::Transport {
        message: err.to_string(),
    }
    .into()
}

/// Error body shape the API sends with non-success statuses
///
/// Spring answers with `{"message": ...}` most of the time and with only
/// an `"error"` field for a few framework-generated responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Extracts the most useful message from an error response body
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
        if let Some(error) = parsed.error {
            return error;
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
