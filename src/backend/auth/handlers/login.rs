/**
 * Login Handler
 *
 * This module implements the handler for POST /api/login.
 *
 * # Validation Order
 *
 * 1. Reject with 400 if neither username nor email is present
 * 2. Reject with 400 if the password is absent
 * 3. Look up the first record matching the username or email
 * 4. Reject with 401 if no record matches
 * 5. Reject with 401 if the password differs
 * 6. Return the mock token and the record's identity fields
 *
 * A field is present when its JSON value is truthy (`""`, `0`, `false` and
 * `null` are not). Only string values are compared, with plain equality, so a
 * number or object never matches a stored username, email or password.
 */
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;

use crate::backend::auth::credentials::{CredentialRecord, CredentialStore, MOCK_TOKEN};
use crate::backend::error::BackendError;
use crate::shared::{ApiResponse, LoginData, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing identifier, missing password, or an unreadable body
/// * `401 Unauthorized` - Unknown user or wrong password
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "testuser", "password": "password123" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Login successful",
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "user": { "username": "testuser", "email": "test@example.com" }
///   }
/// }
/// ```
pub async fn login(
    State(store): State<Arc<CredentialStore>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<LoginData>>, BackendError> {
    let request = parse_login_body(&headers, &body)?;

    let user = authenticate(&store, &request).inspect_err(|e| {
        tracing::warn!(
            identifier = request.identifier().unwrap_or("<none>"),
            "Login rejected: {}",
            e
        );
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(ApiResponse::ok(
        "Login successful",
        LoginData {
            token: MOCK_TOKEN.to_string(),
            user: user.summary(),
        },
    )))
}

/// Check a login request against the credential store
///
/// Returns the matched record, or the error describing the first failed check.
pub fn authenticate<'a>(
    store: &'a CredentialStore,
    request: &LoginRequest,
) -> Result<&'a CredentialRecord, BackendError> {
    if !request.has_identifier() {
        return Err(BackendError::MissingIdentifier);
    }

    if !request.has_password() {
        return Err(BackendError::MissingPassword);
    }

    let user = store
        .find(request.username(), request.email())
        .ok_or(BackendError::UserNotFound)?;

    if request.password() != Some(user.password) {
        return Err(BackendError::InvalidPassword);
    }

    Ok(user)
}

/// Decode the request body
///
/// A missing body or a content type other than `application/json` yields an
/// empty request, which then fails identifier validation. So does a JSON
/// array. Only text that is not a JSON object or array is rejected outright.
fn parse_login_body(headers: &HeaderMap, body: &[u8]) -> Result<LoginRequest, BackendError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(LoginRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected login body: {}", e);
        malformed_body()
    })?;

    match value {
        Value::Object(mut fields) => Ok(LoginRequest {
            username: fields.remove("username"),
            email: fields.remove("email"),
            password: fields.remove("password"),
        }),
        Value::Array(_) => Ok(LoginRequest::default()),
        other => {
            tracing::debug!("Rejected non-object login body: {}", other);
            Err(malformed_body())
        }
    }
}

fn malformed_body() -> BackendError {
    BackendError::handler(StatusCode::BAD_REQUEST, "Malformed JSON body")
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
