//! Backend Module
//!
//! This module contains the login server: an Axum HTTP server with two
//! routes backed by a fixed, in-memory credential list.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential records and the login/health handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Credentials and handlers
//! └── error/          - Error types
//! ```
//!
//! # Endpoints
//!
//! - `POST /api/login` - `{username?, email?, password}` → token or 400/401
//! - `GET /api/health` - always 200
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` maps each
//! failure to a status code and renders `{ "success": false, "message": ... }`.
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_auth::backend::server::create_app;
//!
//! # async fn example() -> std::io::Result<()> {
//! let app = create_app();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Credential checks and HTTP handlers
pub mod auth;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerConfig};
pub use error::BackendError;
pub use auth::{CredentialRecord, CredentialStore, MOCK_TOKEN};
