/**
 * Auth Form State
 *
 * Field values, loading flag and messages for the sign-in and sign-up forms.
 * Submitting hands the provider call to a background thread; the view calls
 * `poll()` every frame to pick up the result.
 */

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use crate::egui_app::provider::{AuthProvider, ProviderError};
use crate::egui_app::types::{Session, SignUpResult};
use crate::shared::SharedError;

/// Minimum accepted password length on sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

pub const SIGN_IN_FAILED: &str = "Failed to sign in";
pub const SIGN_UP_FAILED: &str = "Failed to create account";
pub const ACCOUNT_EXISTS: &str = "An account with this email already exists";
pub const ACCOUNT_CREATED: &str = "Account created! Check your email to confirm your account.";

/// A provider call running on a background thread
pub struct PendingCall<T> {
    rx: Receiver<Result<T, ProviderError>>,
}

impl<T: Send + 'static> PendingCall<T> {
    pub fn spawn<F>(call: F) -> Self
    where
        F: FnOnce() -> Result<T, ProviderError> + Send + 'static,
    {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(call());
        });
        Self { rx }
    }

    /// Non-blocking check for the result
    pub fn try_take(&self) -> Option<Result<T, ProviderError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            // Worker panicked before sending
            Err(TryRecvError::Disconnected) => Some(Err(ProviderError::Network(
                "Request was interrupted".to_string(),
            ))),
        }
    }
}

/// Provider message, or `fallback` when the provider gave none
fn message_or(error: &ProviderError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[derive(Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
    pending: Option<PendingCall<Session>>,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both fields are required and only one call may be in flight
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Start a sign-in call. Returns `false` when the submit was ignored.
    pub fn submit(&mut self, provider: Arc<dyn AuthProvider>) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.error = None;
        self.loading = true;

        let email = self.email.trim().to_string();
        let password = self.password.clone();
        self.pending = Some(PendingCall::spawn(move || {
            provider.sign_in(&email, &password)
        }));
        true
    }

    /// Collect a finished call. Yields the session on success.
    pub fn poll(&mut self) -> Option<Session> {
        let result = self.pending.as_ref()?.try_take()?;
        self.pending = None;
        self.loading = false;

        match result {
            Ok(session) => {
                self.password.clear();
                Some(session)
            }
            Err(e) => {
                tracing::warn!("Sign in failed: {}", e);
                self.error = Some(message_or(&e, SIGN_IN_FAILED));
                None
            }
        }
    }
}

#[derive(Default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pending: Option<PendingCall<SignUpResult>>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
            && !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    /// Local checks run before the provider is contacted
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.password != self.confirm_password {
            return Err(SharedError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        Ok(())
    }

    /// Validate and start a sign-up call. Returns `false` when nothing was sent.
    pub fn submit(&mut self, provider: Arc<dyn AuthProvider>) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.error = None;
        self.success = None;

        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return false;
        }

        self.loading = true;

        let full_name = self.full_name.trim().to_string();
        let email = self.email.trim().to_string();
        let password = self.password.clone();
        self.pending = Some(PendingCall::spawn(move || {
            provider.sign_up(&email, &password, &full_name)
        }));
        true
    }

    pub fn poll(&mut self) -> Option<SignUpResult> {
        let result = self.pending.as_ref()?.try_take()?;
        self.pending = None;
        self.loading = false;

        match result {
            Ok(result) if result.is_existing_account() => {
                self.error = Some(ACCOUNT_EXISTS.to_string());
                None
            }
            Ok(result) => {
                self.success = Some(ACCOUNT_CREATED.to_string());
                Some(result)
            }
            Err(e) => {
                tracing::warn!("Sign up failed: {}", e);
                self.error = Some(message_or(&e, SIGN_UP_FAILED));
                None
            }
        }
    }
}
