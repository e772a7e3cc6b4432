//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! with a sign-in form and a sign-up form. Both talk to an external identity
//! provider through the `AuthProvider` trait; the app never checks
//! credentials itself.
//!
//! # Architecture
//!
//! - **`config`** - Provider URL and API key
//! - **`provider`** - `AuthProvider` trait and the HTTP client for it
//! - **`forms`** - Sign-in/sign-up form state and background submission
//! - **`state`** - Top-level app state polled each frame
//! - **`types`** - Session and user objects, view enum
//! - **`views`** - egui rendering
//! - **`theme`** - Colors
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── provider.rs     - Identity provider client
//! ├── forms.rs        - Form state
//! ├── state/          - App state
//! ├── types.rs        - Shared types
//! ├── views/          - Screens
//! └── theme/          - Colors
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin auth_app
//! ```

pub mod config;
pub mod provider;
pub mod forms;
pub mod types;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use provider::{AuthProvider, HttpAuthProvider, ProviderError};
pub use forms::{SignInForm, SignUpForm};
pub use types::{AppView, ProviderUser, Session, SignUpResult};
pub use state::AppState;
