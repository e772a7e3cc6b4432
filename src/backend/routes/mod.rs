//! Route Configuration Module
//!
//! This module configures all HTTP routes for the login server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback, trace layer
//! └── api_routes.rs   - /api endpoints
//! ```
//!
//! # Routes
//!
//! - `POST /api/login` - Login against the fixed credential list
//! - `GET /api/health` - Health check
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
