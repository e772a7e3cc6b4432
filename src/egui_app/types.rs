/**
 * Shared Types Module
 *
 * Defines the app view states and the session/user objects returned by the
 * identity provider.
 */

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Sign-in/sign-up screen
    Auth,
    /// Shown after a successful sign-in
    SignedIn,
}

/// User object as returned by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Linked identities. The provider returns an empty list when sign-up
    /// hits an email that is already registered.
    #[serde(default)]
    pub identities: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// Session returned by a successful sign-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: ProviderUser,
}

impl Session {
    /// Email to show in the UI, falling back to the user id
    pub fn display_name(&self) -> &str {
        self.user.email.as_deref().unwrap_or(&self.user.id)
    }
}

/// Result of a sign-up call
///
/// `session` is only set when the provider does not require email
/// confirmation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpResult {
    pub user: Option<ProviderUser>,
    pub session: Option<Session>,
}

impl SignUpResult {
    /// Whether the provider reported an already-registered email
    pub fn is_existing_account(&self) -> bool {
        self.user
            .as_ref()
            .and_then(|user| user.identities.as_ref())
            .is_some_and(Vec::is_empty)
    }
}
