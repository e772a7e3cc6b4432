//! HTTP identity provider client tests
//!
//! The client is blocking, so each call runs on tokio's blocking pool while
//! wiremock serves from the async side.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use travel_auth::egui_app::{AuthProvider, Config, HttpAuthProvider, ProviderError};
use travel_auth::shared::AppConfig;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, key: Option<&str>) -> Config {
    let mut builder = AppConfig::builder().server_url(server.uri());
    if let Some(key) = key {
        builder = builder.api_key(key);
    }
    crate::assert_ok!(Config::with_builder(builder))
}

/// Run a provider call off the async runtime
async fn call<T, F>(config: Config, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&HttpAuthProvider) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let provider = crate::assert_ok!(HttpAuthProvider::new(config));
        f(&provider)
    })
    .await
    .expect("provider task panicked")
}

fn session_body(email: &str) -> serde_json::Value {
    json!({
        "access_token": "jwt-token",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh",
        "user": { "id": "user-1", "email": email, "identities": [{ "provider": "email" }] }
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_in_posts_password_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "anon-key"))
        .and(body_json(json!({ "email": "test@example.com", "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let session = call(config(&server, Some("anon-key")), |p| {
        p.sign_in("test@example.com", "password123")
    })
    .await;

    let session = crate::assert_ok!(session);
    assert_eq!(session.access_token, "jwt-token");
    assert_eq!(session.display_name(), "test@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_in_rejection_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| p.sign_in("test@example.com", "wrong")).await;

    assert_matches!(
        result,
        Err(ProviderError::Rejected { status: 400, ref message }) if message == "Invalid login credentials"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejection_without_message_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| p.sign_in("a@example.com", "secret1")).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Request failed with status 503"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_up_sends_full_name_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "new@example.com",
            "password": "secret123",
            "data": { "full_name": "Jane Traveller" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-2",
            "email": "new@example.com",
            "identities": [{ "provider": "email" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| {
        p.sign_up("new@example.com", "secret123", "Jane Traveller")
    })
    .await;

    let result = crate::assert_ok!(result);
    assert!(result.session.is_none());
    assert!(!result.is_existing_account());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_up_existing_email_has_empty_identities() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "email": "test@example.com",
            "identities": []
        })))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| {
        p.sign_up("test@example.com", "secret123", "Test User")
    })
    .await;

    assert!(crate::assert_ok!(result).is_existing_account());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_up_with_session_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("new@example.com")))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| {
        p.sign_up("new@example.com", "secret123", "Jane")
    })
    .await;

    let result = crate::assert_ok!(result);
    assert_eq!(
        result.session.map(|s| s.access_token),
        Some("jwt-token".to_string())
    );
    assert_eq!(
        result.user.and_then(|u| u.email),
        Some("new@example.com".to_string())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_up_rejection_uses_msg_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "msg": "Password should be at least 6 characters"
        })))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| p.sign_up("a@example.com", "123", "A")).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Password should be at least 6 characters"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_success_with_garbage_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = call(config(&server, None), |p| p.sign_in("a@example.com", "secret1")).await;

    assert_matches!(result, Err(ProviderError::Decode(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_provider_is_network_error() {
    // Nothing listens on port 1
    let config = crate::assert_ok!(Config::with_builder(
        AppConfig::builder().server_url("http://127.0.0.1:1")
    ));

    let result = call(config, |p| p.sign_in("a@example.com", "secret1")).await;

    assert_matches!(result, Err(ProviderError::Network(_)));
}
