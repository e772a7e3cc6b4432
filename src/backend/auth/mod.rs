//! Authentication Module
//!
//! This module checks login requests against the fixed credential list and
//! exposes the HTTP handlers for the API.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Credential records, store, mock token
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── login.rs    - POST /api/login
//!     └── health.rs   - GET /api/health
//! ```
//!
//! # Authentication Flow
//!
//! The client sends a username or email plus a password. The first record
//! matching either identifier is compared by plain equality, and a match
//! returns the fixed mock token.
//!
//! There is no hashing, no token signing and no session storage. A real
//! identity provider owns those concerns.

/// Credential records and lookup
pub mod credentials;

/// HTTP handlers for the API endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::{CredentialRecord, CredentialStore, MOCK_TOKEN, TEST_USERS};
pub use handlers::{authenticate, health, login};
