//! Shared Error Types
//!
//! This module defines error types for input that fails local checks before
//! anything is sent over the wire.
//!
//! # Error Categories
//!
//! - `ValidationError` - Input validation failures
//!
//! # Usage
//!
//! ```rust
//! use travel_auth::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Please provide password");
//! ```
use thiserror::Error;

/// Shared error types for rejected input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Input validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
