//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Listen address from the environment
//! └── init.rs         - App creation and the serve loop
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_auth::backend::server::{run, ServerConfig};
//!
//! # async fn example() -> std::io::Result<()> {
//! let config = ServerConfig::default();
//! run(&config).await
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::ServerConfig;
pub use init::{create_app, create_app_with_state, run};
