//! HTTP Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── login.rs    - POST /api/login
//! └── health.rs   - GET /api/health
//! ```

/// Login handler
pub mod login;

/// Health check handler
pub mod health;

pub use login::{authenticate, login};
pub use health::health;
