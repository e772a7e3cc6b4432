/**
 * Backend Error Types
 *
 * This module defines error types specific to the login server.
 * These errors are returned from HTTP handlers and converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Validation Errors (400)
 *
 * - Neither username nor email was provided
 * - No password was provided
 *
 * ## Authentication Errors (401)
 *
 * - No credential record matches the identifier
 * - The password does not match the record
 *
 * ## Handler Errors
 *
 * Generic request failures carrying their own status code, such as a body
 * that is not valid JSON.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Backend-specific error types
///
/// Each variant maps to a fixed HTTP status code and a client-facing message.
///
/// # Usage
///
/// ```rust
/// use travel_auth::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::UserNotFound;
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Malformed JSON body");
/// assert_eq!(err.message(), "Malformed JSON body");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Neither a username nor an email was present
    #[error("Please provide username or email")]
    MissingIdentifier,

    /// No password was present
    #[error("Please provide password")]
    MissingPassword,

    /// No credential record matches the identifier
    #[error("User not found")]
    UserNotFound,

    /// The password does not match the credential record
    #[error("Invalid password")]
    InvalidPassword,

    /// Handler error (e.g., malformed request body)
    #[error("{message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingIdentifier`, `MissingPassword` - 400 Bad Request
    /// - `UserNotFound`, `InvalidPassword` - 401 Unauthorized
    /// - `HandlerError` - Uses the status code from the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingIdentifier | Self::MissingPassword => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::InvalidPassword => StatusCode::UNAUTHORIZED,
            Self::HandlerError { status, .. } => *status,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
