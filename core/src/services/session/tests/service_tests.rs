//! Unit tests for session service

use std::sync::Arc;

use crate::domain::entities::user::Role;
use crate::errors::{ApiError, DomainError, SessionError};
use crate::gateways::{MemorySessionStore, SessionStore};
use crate::services::session::{SessionService, SessionState};

use super::mocks::*;

fn service_with(
    gateway: MockAuthGateway,
) -> (Arc<MemorySessionStore>, SessionService<MemorySessionStore, MockAuthGateway>) {
    let store = Arc::new(MemorySessionStore::new());
    let service = SessionService::new(store.clone(), Arc::new(gateway));
    (store, service)
}

#[tokio::test]
async fn test_login_persists_session() {
    let token = candidate_token();
    let (store, service) = service_with(MockAuthGateway::issuing(token.clone()));

    let claims = service.login("jane@example.com", "hunter2").await.unwrap();
    assert_eq!(claims.sub.as_deref(), Some("jane@example.com"));
    assert_eq!(claims.user_id, Some(12));

    let stored = store.load().unwrap().unwrap();
    assert_eq!(stored.token, token);
    assert_eq!(stored.role.as_deref(), Some("CANDIDATE"));
    assert_eq!(stored.user_id, Some(12));
    assert_eq!(stored.email.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn test_login_passes_credentials_through() {
    let gateway = MockAuthGateway::issuing(candidate_token());
    let calls = gateway.login_calls.clone();
    let (_, service) = service_with(gateway);

    service.login("a@b.co", "pw").await.unwrap();
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[("a@b.co".to_string(), "pw".to_string())]
    );
}

#[tokio::test]
async fn test_login_response_user_id_wins_over_claim() {
    // Claim says 12, response says 99
    let (store, service) =
        service_with(MockAuthGateway::issuing_for_user(candidate_token(), 99));

    service.login("jane@example.com", "hunter2").await.unwrap();
    assert_eq!(store.load().unwrap().unwrap().user_id, Some(99));
    assert_eq!(service.user_id(), Some(99));
}

#[tokio::test]
async fn test_login_rejects_unreadable_token() {
    let (store, service) = service_with(MockAuthGateway::issuing("not-a-token"));

    let result = service.login("jane@example.com", "hunter2").await;
    match result.unwrap_err() {
        DomainError::Session(SessionError::MalformedToken) => {}
        other => panic!("Expected MalformedToken, got {:?}", other),
    }

    // Nothing was persisted
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_login_surfaces_api_rejection() {
    let (store, service) = service_with(MockAuthGateway::failing(401, "Invalid credentials"));

    let result = service.login("jane@example.com", "wrong").await;
    match result.unwrap_err() {
        DomainError::Api(ApiError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("Expected Api status error, got {:?}", other),
    }
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_register_persists_session() {
    let gateway = MockAuthGateway::issuing(candidate_token());
    let register_calls = gateway.register_calls.clone();
    let (store, service) = service_with(gateway);

    let claims = service
        .register("Jane Doe", "jane@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(claims.name.as_deref(), Some("Jane Doe"));

    assert_eq!(register_calls.lock().unwrap().len(), 1);
    assert!(store.load().unwrap().is_some());
}

#[test]
fn test_oauth_callback_persists_token() {
    let token = candidate_token();
    let (store, service) = service_with(MockAuthGateway::issuing(""));

    let claims = service.complete_oauth_callback(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("jane@example.com"));
    assert_eq!(store.load().unwrap().unwrap().token, token);
}

#[test]
fn test_oauth_callback_rejects_malformed_token() {
    let (store, service) = service_with(MockAuthGateway::issuing(""));

    let result = service.complete_oauth_callback("redirect-garbage");
    match result.unwrap_err() {
        DomainError::Session(SessionError::MalformedToken) => {}
        other => panic!("Expected MalformedToken, got {:?}", other),
    }
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_logout_clears_store() {
    let token = candidate_token();
    let (store, service) = service_with(MockAuthGateway::issuing(""));
    service.complete_oauth_callback(&token).unwrap();

    service.logout().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(service.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_password_reset_passes_through() {
    let gateway = MockAuthGateway::issuing("");
    let reset_calls = gateway.reset_request_calls.clone();
    let (_, service) = service_with(gateway);

    let message = service.request_password_reset("jane@example.com").await.unwrap();
    assert_eq!(message, "Password reset email sent");
    assert_eq!(reset_calls.lock().unwrap().as_slice(), &["jane@example.com".to_string()]);

    let message = service.reset_password("reset-token", "newpw").await.unwrap();
    assert_eq!(message, "Password has been reset");
}

#[test]
fn test_state_authenticated_for_live_token() {
    let (_, service) = service_with(MockAuthGateway::issuing(""));
    service.complete_oauth_callback(&candidate_token()).unwrap();

    let state = service.state();
    assert!(state.is_authenticated());
    match state {
        SessionState::Authenticated { claims } => {
            assert_eq!(claims.user_id, Some(12));
        }
        SessionState::Anonymous => panic!("Expected an authenticated state"),
    }
    assert_eq!(service.role(), Some(Role::Candidate));
}

#[test]
fn test_state_anonymous_when_signed_out() {
    let (_, service) = service_with(MockAuthGateway::issuing(""));
    assert_eq!(service.state(), SessionState::Anonymous);
    assert!(service.is_expired());
    assert_eq!(service.bearer_token(), None);
    assert_eq!(service.user_id(), None);
    assert_eq!(service.role(), None);
}

#[test]
fn test_expired_token_reads_as_anonymous() {
    let (_, service) = service_with(MockAuthGateway::issuing(""));
    service.complete_oauth_callback(&expired_token()).unwrap();

    // The render state treats it exactly like a signed-out session
    assert_eq!(service.state(), SessionState::Anonymous);
    assert!(service.is_expired());
    assert_eq!(service.role(), None);

    // The raw payload stays readable for credential inspection
    assert!(service.decode().is_some());
}

#[test]
fn test_bearer_token_returns_raw_credential() {
    let token = candidate_token();
    let (_, service) = service_with(MockAuthGateway::issuing(""));
    service.complete_oauth_callback(&token).unwrap();

    assert_eq!(service.bearer_token(), Some(token));
}

#[test]
fn test_role_ignores_unknown_role_strings() {
    let (_, service) = service_with(MockAuthGateway::issuing(""));
    let token = token_with_payload(
        r#"{"sub":"x@y.z","role":"SUPERVISOR","exp":4102444800}"#,
    );
    service.complete_oauth_callback(&token).unwrap();

    assert_eq!(service.role(), None);
    // The raw string is still there for anyone who wants it
    assert_eq!(service.decode().unwrap().role.as_deref(), Some("SUPERVISOR"));
}
