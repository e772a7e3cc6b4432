//! Login endpoint integration tests
//!
//! Drives `POST /api/login` through the full router, including body parsing
//! and the JSON error envelope.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use travel_auth::backend::MOCK_TOKEN;

use crate::assert_failure;
use crate::common::{post_json, post_raw};

#[tokio::test]
async fn test_login_by_username_success() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "token": MOCK_TOKEN,
                "user": { "username": "testuser", "email": "test@example.com" }
            }
        })
    );
}

#[tokio::test]
async fn test_login_by_email_success() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "email": "admin@example.com", "password": "admin123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], "admin");
    assert_eq!(body["data"]["token"], MOCK_TOKEN);
}

#[tokio::test]
async fn test_login_response_never_contains_password() {
    let (_, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "password": "password123" }),
    )
    .await;

    assert!(!body.to_string().contains("password123"));
    assert!(body["data"]["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_missing_identifier() {
    let (status, body) = post_json("/api/login", json!({ "password": "x" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_empty_identifier_counts_as_missing() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "", "email": "", "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_missing_password() {
    let (status, body) = post_json("/api/login", json!({ "username": "testuser" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide password");
}

#[tokio::test]
async fn test_login_empty_password_counts_as_missing() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "password": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide password");
}

#[tokio::test]
async fn test_login_missing_identifier_checked_before_password() {
    let (status, body) = post_json("/api/login", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "nobody", "password": "x" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_failure!(body, "User not found");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "password": "wrong" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_failure!(body, "Invalid password");
}

#[tokio::test]
async fn test_login_email_used_when_username_unknown() {
    // Either identifier may match; the first record hit wins
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "nobody", "email": "test@example.com", "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], "testuser");
}

#[tokio::test]
async fn test_login_is_case_sensitive() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "TestUser", "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_failure!(body, "User not found");
}

#[tokio::test]
async fn test_login_without_body() {
    let (status, body) = post_raw("/api/login", None, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_non_json_content_type_is_ignored() {
    let (status, body) = post_raw(
        "/api/login",
        Some("text/plain"),
        r#"{"username":"testuser","password":"password123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_malformed_json() {
    let (status, body) = post_raw("/api/login", Some("application/json"), "{\"username\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Malformed JSON body");
}

#[tokio::test]
async fn test_login_non_string_email_ignored_when_username_matches() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "email": 5, "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token"], MOCK_TOKEN);
}

#[tokio::test]
async fn test_login_numeric_username_is_unknown_user() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": 42, "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_failure!(body, "User not found");
}

#[tokio::test]
async fn test_login_numeric_password_is_invalid() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": "testuser", "password": 123 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_failure!(body, "Invalid password");
}

#[tokio::test]
async fn test_login_falsy_values_count_as_missing() {
    let (status, body) = post_json(
        "/api/login",
        json!({ "username": 0, "email": null, "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_json_suffix_content_type_is_ignored() {
    let (status, body) = post_raw(
        "/api/login",
        Some("application/vnd.api+json"),
        r#"{"username":"testuser","password":"password123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure!(body, "Please provide username or email");
}

#[tokio::test]
async fn test_login_repeated_calls_are_stateless() {
    let request = json!({ "username": "admin", "password": "admin123" });

    let (first_status, first) = post_json("/api/login", request.clone()).await;
    let (second_status, second) = post_json("/api/login", request).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
}
