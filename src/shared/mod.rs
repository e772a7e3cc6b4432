//! Shared Module
//!
//! This module contains types that are shared between the login server and
//! the desktop app. All of them are plain data and serialize to JSON.

/// Login API request and response types
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use api::{ApiResponse, LoginData, LoginRequest, UserSummary};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
