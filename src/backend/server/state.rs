/**
 * Application State Management
 *
 * This module defines the application state shared by all handlers and the
 * `FromRef` implementations that let handlers extract only what they need.
 *
 * # Thread Safety
 *
 * The only shared data is the credential store, which is never mutated
 * after startup. It is shared through `Arc` with no locking.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::credentials::CredentialStore;

/// Application state for the Axum router
///
/// # Usage
///
/// ```rust
/// use std::sync::Arc;
/// use axum::extract::State;
/// use travel_auth::backend::auth::CredentialStore;
///
/// async fn handler(State(store): State<Arc<CredentialStore>>) {
///     let _ = store.find(Some("testuser"), None);
/// }
/// ```
#[derive(Clone, Default)]
pub struct AppState {
    /// Read-only credential records checked by the login handler
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for Arc<CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
