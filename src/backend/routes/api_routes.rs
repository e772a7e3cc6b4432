/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /api/login` - Credential check, returns the mock token
 * - `GET /api/health` - Liveness check
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{health, login};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Both routes are public. Any other method on these paths gets Axum's
/// default 405 response.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/login", post(login))
        .route("/api/health", get(health))
}
