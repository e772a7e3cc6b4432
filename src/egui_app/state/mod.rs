use std::sync::Arc;

use crate::egui_app::forms::{SignInForm, SignUpForm};
use crate::egui_app::{AppView, AuthProvider, Session};

/// Central application state shared across egui views.
pub struct AppState {
    pub provider: Arc<dyn AuthProvider>,
    pub current_view: AppView,
    pub is_signup_mode: bool,
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub session: Option<Session>,
}

impl AppState {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            current_view: AppView::Auth,
            is_signup_mode: false,
            sign_in: SignInForm::new(),
            sign_up: SignUpForm::new(),
            session: None,
        }
    }

    /// Pick up finished provider calls. Called once per frame.
    pub fn check_auth_result(&mut self) {
        if let Some(session) = self.sign_in.poll() {
            tracing::info!("Signed in as {}", session.display_name());
            self.session = Some(session);
            self.current_view = AppView::SignedIn;
        }

        if let Some(result) = self.sign_up.poll() {
            let email = result
                .user
                .as_ref()
                .and_then(|user| user.email.as_deref())
                .unwrap_or_default();
            tracing::info!("Account created for {}", email);
        }
    }

    pub fn handle_sign_in(&mut self) {
        if self.sign_in.submit(self.provider.clone()) {
            tracing::debug!("Sign in submitted for {}", self.sign_in.email.trim());
        }
    }

    pub fn handle_sign_up(&mut self) {
        if self.sign_up.submit(self.provider.clone()) {
            tracing::debug!("Sign up submitted for {}", self.sign_up.email.trim());
        }
    }

    /// Switch between the two forms, starting the other one fresh
    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        if self.is_signup_mode {
            self.sign_up = SignUpForm::new();
        } else {
            self.sign_in = SignInForm::new();
        }
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.display_name());
        }
        self.current_view = AppView::Auth;
        self.is_signup_mode = false;
        self.sign_in = SignInForm::new();
        self.sign_up = SignUpForm::new();
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
