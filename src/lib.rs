//! Travel Auth - Main Library
//!
//! A small username/password login flow made of two independent pieces:
//! a login server with a fixed credential list, and a desktop UI whose
//! sign-in and sign-up forms delegate to an external identity provider.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - Login request and JSON response envelope
//!   - Error types
//!   - Client configuration builder
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with `POST /api/login` and `GET /api/health`
//!   - In-memory credential list and mock token
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Sign-in and sign-up forms
//!   - `AuthProvider` trait and HTTP provider client
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (on by default)
//!
//! # Usage
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
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for rejected form input
//! - `backend::error::BackendError` renders `{ "success": false, "message": ... }`
//! - `egui_app::provider::ProviderError` carries the provider's message

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
